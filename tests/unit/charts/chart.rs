use super::*;
use crate::support::options::option_map;
use serde_json::json;

fn sales_table() -> Value {
    json!({
        "cols": [
            {"id": "month", "label": "Month", "type": "string"},
            {"id": "sales", "label": "Sales", "type": "number"}
        ],
        "rows": [
            {"c": [{"v": "Jan"}, {"v": 1000}]},
            {"c": [{"v": "Feb"}, {"v": 1170}]}
        ]
    })
}

struct BrokenTable;

impl DataTable for BrokenTable {
    fn underlying_table(&self) -> VizResult<Value> {
        Err(VizError::InvalidDataTable("no columns".to_string()))
    }
}

struct NullTable;

impl DataTable for NullTable {
    fn underlying_table(&self) -> VizResult<Value> {
        Ok(Value::Null)
    }
}

fn line_chart(options: Value) -> VizResult<Chart> {
    Chart::new(
        ChartKind::Line,
        "Sales",
        &sales_table(),
        option_map(options).unwrap(),
    )
}

#[test]
fn sales_chart_serializes_to_the_wire_shape() {
    let chart = line_chart(json!({"title": "Q1 Sales", "elementId": "chart-div"})).unwrap();

    assert_eq!(
        chart.to_value().unwrap(),
        json!({
            "type": "LineChart",
            "label": "Sales",
            "options": {"title": "Q1 Sales"},
            "datatable": sales_table(),
            "element_id": "chart-div"
        })
    );
}

#[test]
fn element_id_is_null_when_not_configured() {
    let chart = line_chart(json!({"title": "Q1 Sales"})).unwrap();
    assert!(chart.element_id().is_none());
    assert_eq!(chart.to_value().unwrap()["element_id"], Value::Null);
}

#[test]
fn metadata_comes_from_the_kind_table() {
    let chart = line_chart(json!({})).unwrap();
    assert_eq!(chart.kind(), ChartKind::Line);
    assert_eq!(chart.type_tag(), "LineChart");
    assert_eq!(chart.wrap_type(), "chartType");
    assert_eq!(chart.wrapped_type(), "LineChart");
    assert_eq!(chart.version(), "3.1.0");
    assert_eq!(chart.js_package(), "corechart");
    assert_eq!(chart.js_class(), "google.visualization.LineChart");
    assert_eq!(chart.label().as_str(), "Sales");
    assert_eq!(chart.data_table(), &sales_table());

    let table = Chart::new(ChartKind::Table, "t", &sales_table(), OptionMap::new()).unwrap();
    assert_eq!(table.js_package(), "table");
    assert_eq!(table.js_class(), "google.visualization.Table");
}

#[test]
fn unknown_option_fails_construction() {
    let err = line_chart(json!({"title": "x", "pieHole": 0.4})).unwrap_err();
    assert!(matches!(
        err,
        VizError::InvalidConfigProperty { ref owner, ref property }
            if owner == "LineChart" && property == "pieHole"
    ));
}

#[test]
fn bad_option_value_fails_construction() {
    let err = line_chart(json!({"width": [400]})).unwrap_err();
    assert!(matches!(err, VizError::InvalidConfigValue { .. }));
}

#[test]
fn malformed_element_id_fails_construction() {
    assert!(matches!(
        line_chart(json!({"elementId": "   "})),
        Err(VizError::InvalidElementId(_))
    ));
    assert!(matches!(
        line_chart(json!({"elementId": "two words"})),
        Err(VizError::InvalidElementId(_))
    ));
    assert!(matches!(
        line_chart(json!({"elementId": 7})),
        Err(VizError::InvalidConfigValue { .. })
    ));
}

#[test]
fn invalid_label_fails_construction() {
    let err = Chart::new(ChartKind::Line, "  ", &sales_table(), OptionMap::new()).unwrap_err();
    assert!(matches!(err, VizError::InvalidLabel(_)));
}

#[test]
fn datatable_is_extracted_eagerly() {
    let err = Chart::new(ChartKind::Pie, "p", &BrokenTable, OptionMap::new()).unwrap_err();
    assert!(matches!(err, VizError::InvalidDataTable(_)));

    let err = Chart::new(ChartKind::Pie, "p", &NullTable, OptionMap::new()).unwrap_err();
    assert!(matches!(err, VizError::InvalidDataTable(_)));

    let err = Chart::new(ChartKind::Pie, "p", &Value::Null, OptionMap::new()).unwrap_err();
    assert!(matches!(err, VizError::InvalidDataTable(_)));
}

#[test]
fn events_accessors_tolerate_absence() {
    let chart = line_chart(json!({})).unwrap();
    assert!(!chart.has_events());
    assert!(chart.events().is_none());

    let chart = line_chart(json!({"events": {"ready": "onReady"}})).unwrap();
    assert!(chart.has_events());
    assert_eq!(
        chart.events().unwrap().to_value().unwrap(),
        json!({"ready": "onReady"})
    );
}

#[test]
fn customize_accepts_unknown_keys_and_chains() {
    let mut chart = line_chart(json!({"title": "Q1"})).unwrap();
    chart
        .customize(option_map(json!({"explorer": {"axis": "horizontal"}})).unwrap())
        .customize(option_map(json!({"someFutureOption": true, "title": "Q2"})).unwrap());

    assert_eq!(
        chart.options().get("someFutureOption").unwrap().as_bool(),
        Some(true)
    );
    assert_eq!(
        chart.to_value().unwrap()["options"],
        json!({"title": "Q2", "explorer": {"axis": "horizontal"}, "someFutureOption": true})
    );
}

#[test]
fn customize_routes_element_id_into_the_payload() {
    let mut chart = line_chart(json!({"elementId": "old-div"})).unwrap();
    chart.customize(option_map(json!({"elementId": "new-div", "title": "Q3"})).unwrap());

    assert_eq!(chart.element_id().unwrap().as_str(), "new-div");
    assert!(!chart.options().has("elementId"));
    let payload = chart.to_value().unwrap();
    assert_eq!(payload["element_id"], "new-div");
    assert_eq!(payload["options"], json!({"title": "Q3"}));

    chart.customize(option_map(json!({"elementId": "two words"})).unwrap());
    assert_eq!(chart.element_id().unwrap().as_str(), "new-div");
    assert!(!chart.options().has("elementId"));
}

#[test]
fn set_option_is_strict_and_routes_element_id() {
    let mut chart = line_chart(json!({})).unwrap();
    chart.set_option("curveType", "function").unwrap();
    assert!(matches!(
        chart.set_option("bogus", 1),
        Err(VizError::InvalidConfigProperty { .. })
    ));
    assert!(!chart.options().has("bogus"));

    chart.set_option("elementId", "line-div").unwrap();
    assert_eq!(chart.element_id().unwrap().as_str(), "line-div");
    assert!(!chart.options().has("elementId"));

    chart.set_element_id(ElementId::new("other").unwrap());
    assert_eq!(chart.element_id().unwrap().as_str(), "other");
}

#[test]
fn json_round_trips_to_the_structural_value() {
    let chart = line_chart(json!({
        "title": "Q1",
        "hAxis": {"title": "Month"},
        "colors": ["#e0440e", "#e6693e"],
        "elementId": "chart-div"
    }))
    .unwrap();

    let decoded: Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
    assert_eq!(decoded, chart.to_value().unwrap());

    let decoded: Value = serde_json::from_str(&chart.to_json_pretty().unwrap()).unwrap();
    assert_eq!(decoded, chart.to_value().unwrap());

    assert_eq!(serde_json::to_value(&chart).unwrap(), chart.to_value().unwrap());
}

#[test]
fn chart_kinds_resolve_from_type_names() {
    assert_eq!(ChartKind::from_type_name("LineChart").unwrap(), ChartKind::Line);
    assert_eq!(ChartKind::from_type_name("Line").unwrap(), ChartKind::Line);
    assert_eq!(ChartKind::from_type_name("Table").unwrap(), ChartKind::Table);
    assert_eq!(ChartKind::from_type_name("TableChart").unwrap(), ChartKind::Table);
    assert_eq!(ChartKind::from_type_name("PieChart").unwrap(), ChartKind::Pie);
    assert_eq!(ChartKind::from_type_name("DonutChart").unwrap(), ChartKind::Donut);
    assert_eq!(ChartKind::from_type_name("Donut").unwrap(), ChartKind::Donut);
    assert!(matches!(
        ChartKind::from_type_name("Potato"),
        Err(VizError::InvalidChartType(_))
    ));
}

#[test]
fn kind_table_is_in_declaration_order() {
    for kind in ChartKind::ALL {
        assert_eq!(kind.meta().kind, kind);
        assert_eq!(kind.meta().schema.owner, kind.name());
        assert!(kind.meta().schema.allows("elementId"));
    }
}

#[test]
fn donut_is_a_pie_chart_with_a_default_hole() {
    let donut = Chart::new(ChartKind::Donut, "Share", &sales_table(), OptionMap::new()).unwrap();
    assert_eq!(donut.kind(), ChartKind::Donut);
    assert_eq!(donut.type_tag(), "PieChart");
    assert_eq!(donut.js_class(), "google.visualization.PieChart");
    assert_eq!(donut.js_package(), "corechart");
    assert_eq!(donut.to_value().unwrap()["options"], json!({"pieHole": 0.5}));

    let donut = Chart::new(
        ChartKind::Donut,
        "Share",
        &sales_table(),
        option_map(json!({"pieHole": 0.3, "is3D": false})).unwrap(),
    )
    .unwrap();
    assert_eq!(donut.options().get("pieHole").unwrap().as_f64(), Some(0.3));

    let err = Chart::new(
        ChartKind::Donut,
        "Share",
        &sales_table(),
        option_map(json!({"curveType": "function"})).unwrap(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        VizError::InvalidConfigProperty { ref owner, .. } if owner == "DonutChart"
    ));

    let pie = Chart::new(ChartKind::Pie, "Share", &sales_table(), OptionMap::new()).unwrap();
    assert!(!pie.options().has("pieHole"));
}
