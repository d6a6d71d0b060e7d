use super::*;
use crate::support::contracts::{Jsonable, Wrappable};
use crate::support::options::{OptionRule, OptionSchema, ValueKind, option_map, rule};
use serde_json::json;

#[test]
fn normalization_handles_suffix_and_range_casing() {
    assert_eq!(normalize_type_name("DateRange"), "DateRange");
    assert_eq!(normalize_type_name("daterange"), "DateRange");
    assert_eq!(normalize_type_name("DateRangeFilter"), "DateRange");
    assert_eq!(normalize_type_name("numberrange"), "NumberRange");
    assert_eq!(normalize_type_name("chartRange"), "ChartRange");
    assert_eq!(normalize_type_name("CategoryFilter"), "Category");
    assert_eq!(normalize_type_name("category"), "category");
    assert_eq!(normalize_type_name("Filter"), "");
}

#[test]
fn range_spellings_resolve_to_the_same_variant() {
    for name in ["DateRange", "daterange", "DateRangeFilter"] {
        let filter = FilterFactory::create(name, "Date", OptionMap::new()).unwrap();
        assert_eq!(filter.type_tag(), "DateRange", "input {name}");
        assert_eq!(filter.control_type(), "DateRangeFilter");
    }
}

#[test]
fn every_builtin_variant_is_registered() {
    let factory = FilterFactory::default();
    let types: Vec<_> = factory.types().collect();
    assert_eq!(
        types,
        ["Category", "ChartRange", "DateRange", "NumberRange", "String"]
    );
    for tag in types {
        let filter = factory.build(tag, 0usize, OptionMap::new()).unwrap();
        assert_eq!(filter.type_tag(), tag);
        assert_eq!(filter.wrap_type(), "controlType");
    }
}

#[test]
fn number_range_by_index() {
    let filter =
        FilterFactory::create("numberrange", 2usize, option_map(json!({"minValue": 0})).unwrap())
            .unwrap();

    assert_eq!(filter.type_tag(), "NumberRange");
    assert_eq!(filter.column(), &LabelOrIndex::Index(2));
    assert_eq!(filter.options().get("minValue").unwrap().as_f64(), Some(0.0));
    assert_eq!(
        filter.to_value().unwrap(),
        json!({
            "type": "NumberRangeFilter",
            "options": {"minValue": 0, "filterColumnIndex": 2}
        })
    );
}

#[test]
fn unknown_types_name_the_offending_input() {
    let err = FilterFactory::create("BadType", "col", OptionMap::new()).unwrap_err();
    assert!(matches!(err, VizError::InvalidFilterType(ref t) if t == "BadType"));

    let err = FilterFactory::create("Potato", "col", OptionMap::new()).unwrap_err();
    assert!(matches!(err, VizError::InvalidFilterType(ref t) if t == "Potato"));

    let err = FilterFactory::create("category", "col", OptionMap::new()).unwrap_err();
    assert!(matches!(err, VizError::InvalidFilterType(_)));
}

#[test]
fn filter_options_are_allow_listed_per_variant() {
    let err = FilterFactory::create(
        "String",
        "Name",
        option_map(json!({"minValue": 1})).unwrap(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        VizError::InvalidConfigProperty { ref owner, .. } if owner == "StringFilter"
    ));

    let err = FilterFactory::create(
        "NumberRange",
        "Age",
        option_map(json!({"minValue": "low"})).unwrap(),
    )
    .unwrap_err();
    assert!(matches!(err, VizError::InvalidConfigValue { .. }));

    let mut filter = FilterFactory::create(
        "StringFilter",
        "Name",
        option_map(json!({"matchType": "any"})).unwrap(),
    )
    .unwrap();
    filter.set_option("caseSensitive", true).unwrap();
    assert!(filter.set_option("pieHole", 0.5).is_err());
    assert_eq!(
        filter.to_value().unwrap(),
        json!({
            "type": "StringFilter",
            "options": {"matchType": "any", "caseSensitive": true, "filterColumnLabel": "Name"}
        })
    );
}

#[test]
fn column_keys_come_only_from_the_bound_column() {
    for key in ["filterColumnIndex", "filterColumnLabel"] {
        let mut entries = option_map(json!({"useFormattedValue": true})).unwrap();
        entries.insert(key.to_string(), 4.into());
        let err = FilterFactory::create("Category", "Gender", entries).unwrap_err();
        assert!(matches!(
            err,
            VizError::InvalidConfigProperty { ref property, .. } if property == key
        ));
    }

    let mut filter = FilterFactory::create("Category", "Gender", OptionMap::new()).unwrap();
    assert!(filter.set_option("filterColumnIndex", 4).is_err());
    assert_eq!(
        filter.to_value().unwrap()["options"],
        json!({"filterColumnLabel": "Gender"})
    );
}

#[test]
fn number_range_bounds_must_be_finite() {
    for bound in ["infinity", "NaN", "-inf"] {
        let err = FilterFactory::create(
            "NumberRange",
            0usize,
            option_map(json!({"minValue": bound})).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, VizError::InvalidConfigValue { .. }), "bound {bound}");
    }
}

#[test]
fn empty_column_label_is_a_param_error() {
    let err = FilterFactory::create("Category", "  ", OptionMap::new()).unwrap_err();
    assert!(matches!(err, VizError::InvalidParamType { .. }));
}

#[test]
fn label_or_index_conversions() {
    assert_eq!(LabelOrIndex::try_from(3i64).unwrap(), LabelOrIndex::Index(3));
    assert!(matches!(
        LabelOrIndex::try_from(-1i64),
        Err(VizError::InvalidParamType { .. })
    ));
    assert_eq!(
        LabelOrIndex::try_from(&json!("Name")).unwrap(),
        LabelOrIndex::Label("Name".to_string())
    );
    assert_eq!(LabelOrIndex::try_from(&json!(1)).unwrap(), LabelOrIndex::Index(1));
    for bad in [json!(-1), json!(1.5), json!(true), json!(null), json!({})] {
        assert!(matches!(
            LabelOrIndex::try_from(&bad),
            Err(VizError::InvalidParamType { .. })
        ));
    }
}

const SLIDER_RULES: &[OptionRule] = &[rule("step", ValueKind::Number)];

static SLIDER: FilterMeta = FilterMeta {
    type_tag: "Slider",
    schema: OptionSchema {
        owner: "SliderFilter",
        layers: &[SLIDER_RULES],
    },
};

#[test]
fn new_variants_register_without_touching_lookup() {
    let mut factory = FilterFactory::default();
    assert!(!factory.is_registered("Slider"));
    factory.register("Slider", |c, o| Filter::new(&SLIDER, c, o));

    let filter = factory
        .build("SliderFilter", 1usize, option_map(json!({"step": 5})).unwrap())
        .unwrap();
    assert_eq!(filter.control_type(), "SliderFilter");

    assert!(FilterFactory::create("Slider", 1usize, OptionMap::new()).is_err());
}

#[test]
fn filter_serializes_through_serde() {
    let filter = FilterFactory::create("ChartRange", 0usize, OptionMap::new()).unwrap();
    assert_eq!(
        serde_json::to_value(&filter).unwrap(),
        filter.to_value().unwrap()
    );
}
