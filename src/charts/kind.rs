use crate::foundation::error::{VizError, VizResult};
use crate::support::options::{OptionRule, OptionSchema, ValueKind as K, rule};

/// Loader version every built-in chart is declared against.
pub const CHART_VERSION: &str = "3.1.0";

/// Wrapper key a chart's type is stored under inside a dashboard.
pub const CHART_WRAP_TYPE: &str = "chartType";

const CORECHART: &str = "corechart";

/// Static description of one chart kind.
///
/// `name` is what definitions and errors call the kind; `type_tag` is the runtime class drawing
/// it. They differ only for kinds that are presets of another class.
#[derive(Debug)]
pub struct ChartMeta {
    pub kind: ChartKind,
    pub name: &'static str,
    pub type_tag: &'static str,
    pub version: &'static str,
    pub js_package: &'static str,
    pub schema: OptionSchema,
    /// Numeric options filled in when construction leaves them out.
    pub defaults: &'static [(&'static str, f64)],
}

/// Every chart kind the rendering runtime draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Annotation,
    Area,
    Bar,
    Bubble,
    Calendar,
    Candlestick,
    Column,
    Combo,
    Donut,
    Gantt,
    Gauge,
    Geo,
    Histogram,
    Line,
    Org,
    Pie,
    Sankey,
    Scatter,
    SteppedArea,
    Table,
    Timeline,
    TreeMap,
    WordTree,
}

impl ChartKind {
    pub const ALL: [ChartKind; 23] = [
        Self::Annotation,
        Self::Area,
        Self::Bar,
        Self::Bubble,
        Self::Calendar,
        Self::Candlestick,
        Self::Column,
        Self::Combo,
        Self::Donut,
        Self::Gantt,
        Self::Gauge,
        Self::Geo,
        Self::Histogram,
        Self::Line,
        Self::Org,
        Self::Pie,
        Self::Sankey,
        Self::Scatter,
        Self::SteppedArea,
        Self::Table,
        Self::Timeline,
        Self::TreeMap,
        Self::WordTree,
    ];

    pub fn meta(self) -> &'static ChartMeta {
        &CHART_TABLE[self as usize]
    }

    pub fn type_tag(self) -> &'static str {
        self.meta().type_tag
    }

    pub fn name(self) -> &'static str {
        self.meta().name
    }

    /// Resolve a chart type name.
    ///
    /// Accepts the kind name (`"LineChart"`, `"Table"`, `"DonutChart"`) and the same name with
    /// the `Chart` suffix added or removed (`"Line"`, `"TableChart"`).
    pub fn from_type_name(name: &str) -> VizResult<Self> {
        let name = name.trim();
        CHART_TABLE
            .iter()
            .find(|m| {
                m.name == name
                    || m.name.strip_suffix("Chart") == Some(name)
                    || name.strip_suffix("Chart") == Some(m.name)
            })
            .map(|m| m.kind)
            .ok_or_else(|| VizError::InvalidChartType(name.to_string()))
    }
}

const BASE: &[OptionRule] = &[
    rule("animation", K::Object),
    rule("backgroundColor", K::StringOrObject),
    rule("chartArea", K::Object),
    rule("colors", K::Array),
    rule("elementId", K::String),
    rule("enableInteractivity", K::Bool),
    rule("events", K::Object),
    rule("fontName", K::String),
    rule("fontSize", K::Numeric),
    rule("forceIFrame", K::Bool),
    rule("height", K::Numeric),
    rule("legend", K::StringOrObject),
    rule("title", K::String),
    rule("titlePosition", K::String),
    rule("titleTextStyle", K::Object),
    rule("tooltip", K::Object),
    rule("width", K::Numeric),
];

const AXIS: &[OptionRule] = &[
    rule("aggregationTarget", K::String),
    rule("annotations", K::Object),
    rule("axisTitlesPosition", K::String),
    rule("crosshair", K::Object),
    rule("dataOpacity", K::Numeric),
    rule("explorer", K::Object),
    rule("focusTarget", K::String),
    rule("hAxis", K::Object),
    rule("orientation", K::String),
    rule("reverseCategories", K::Bool),
    rule("selectionMode", K::String),
    rule("series", K::Any),
    rule("theme", K::String),
    rule("trendlines", K::Object),
    rule("vAxes", K::Any),
    rule("vAxis", K::Object),
];

const LINES: &[OptionRule] = &[
    rule("curveType", K::String),
    rule("interpolateNulls", K::Bool),
    rule("lineDashStyle", K::Array),
    rule("lineWidth", K::Numeric),
    rule("pointShape", K::StringOrObject),
    rule("pointSize", K::Numeric),
    rule("pointsVisible", K::Bool),
];

const AREAS: &[OptionRule] = &[
    rule("areaOpacity", K::Numeric),
    rule("connectSteps", K::Bool),
    rule("isStacked", K::Any),
];

const BARS: &[OptionRule] = &[rule("bar", K::Object), rule("isStacked", K::Any)];

const BUBBLE: &[OptionRule] = &[
    rule("bubble", K::Object),
    rule("colorAxis", K::Object),
    rule("sizeAxis", K::Object),
    rule("sortBubblesBySize", K::Bool),
];

const CANDLESTICK: &[OptionRule] = &[rule("bar", K::Object), rule("candlestick", K::Object)];

const COMBO: &[OptionRule] = &[
    rule("bar", K::Object),
    rule("candlestick", K::Object),
    rule("isStacked", K::Any),
    rule("seriesType", K::String),
];

const HISTOGRAM: &[OptionRule] = &[
    rule("bar", K::Object),
    rule("histogram", K::Object),
    rule("isStacked", K::Any),
];

const PIE: &[OptionRule] = &[
    rule("is3D", K::Bool),
    rule("pieHole", K::Numeric),
    rule("pieResidueSliceColor", K::String),
    rule("pieResidueSliceLabel", K::String),
    rule("pieSliceBorderColor", K::String),
    rule("pieSliceText", K::String),
    rule("pieSliceTextStyle", K::Object),
    rule("pieStartAngle", K::Numeric),
    rule("reverseCategories", K::Bool),
    rule("sliceVisibilityThreshold", K::Numeric),
    rule("slices", K::Any),
];

const ANNOTATION: &[OptionRule] = &[
    rule("allowHtml", K::Bool),
    rule("displayAnnotations", K::Bool),
    rule("displayZoomButtons", K::Bool),
    rule("fill", K::Numeric),
    rule("scaleColumns", K::Array),
    rule("thickness", K::Numeric),
    rule("zoomEndTime", K::Any),
    rule("zoomStartTime", K::Any),
];

const CALENDAR: &[OptionRule] = &[
    rule("calendar", K::Object),
    rule("colorAxis", K::Object),
    rule("noDataPattern", K::Object),
];

const GANTT: &[OptionRule] = &[rule("gantt", K::Object)];

const GAUGE: &[OptionRule] = &[
    rule("greenColor", K::String),
    rule("greenFrom", K::Numeric),
    rule("greenTo", K::Numeric),
    rule("majorTicks", K::Array),
    rule("max", K::Numeric),
    rule("min", K::Numeric),
    rule("minorTicks", K::Numeric),
    rule("redColor", K::String),
    rule("redFrom", K::Numeric),
    rule("redTo", K::Numeric),
    rule("yellowColor", K::String),
    rule("yellowFrom", K::Numeric),
    rule("yellowTo", K::Numeric),
];

const GEO: &[OptionRule] = &[
    rule("colorAxis", K::Object),
    rule("datalessRegionColor", K::String),
    rule("defaultColor", K::String),
    rule("displayMode", K::String),
    rule("keepAspectRatio", K::Bool),
    rule("magnifyingGlass", K::Object),
    rule("markerOpacity", K::Numeric),
    rule("region", K::String),
    rule("resolution", K::String),
    rule("sizeAxis", K::Object),
];

const ORG: &[OptionRule] = &[
    rule("allowCollapse", K::Bool),
    rule("allowHtml", K::Bool),
    rule("nodeClass", K::String),
    rule("selectedNodeClass", K::String),
    rule("size", K::String),
];

const SANKEY: &[OptionRule] = &[rule("sankey", K::Object)];

const TABLE: &[OptionRule] = &[
    rule("allowHtml", K::Bool),
    rule("alternatingRowStyle", K::Bool),
    rule("cssClassNames", K::Object),
    rule("firstRowNumber", K::Numeric),
    rule("frozenColumns", K::Numeric),
    rule("page", K::String),
    rule("pageSize", K::Numeric),
    rule("rtlTable", K::Bool),
    rule("showRowNumber", K::Bool),
    rule("sort", K::String),
    rule("sortAscending", K::Bool),
    rule("sortColumn", K::Numeric),
];

const TIMELINE: &[OptionRule] = &[
    rule("avoidOverlappingGridLines", K::Bool),
    rule("timeline", K::Object),
];

const TREEMAP: &[OptionRule] = &[
    rule("fontColor", K::String),
    rule("headerColor", K::String),
    rule("headerHeight", K::Numeric),
    rule("maxColor", K::String),
    rule("maxDepth", K::Numeric),
    rule("maxPostDepth", K::Numeric),
    rule("midColor", K::String),
    rule("minColor", K::String),
    rule("showScale", K::Bool),
    rule("useWeightedAverageForAggregation", K::Bool),
];

const WORDTREE: &[OptionRule] = &[rule("maxFontSize", K::Numeric), rule("wordtree", K::Object)];

const fn chart(
    kind: ChartKind,
    type_tag: &'static str,
    js_package: &'static str,
    layers: &'static [&'static [OptionRule]],
) -> ChartMeta {
    ChartMeta {
        kind,
        name: type_tag,
        type_tag,
        version: CHART_VERSION,
        js_package,
        schema: OptionSchema {
            owner: type_tag,
            layers,
        },
        defaults: &[],
    }
}

/// A kind drawn by another kind's class, with its own name and defaults.
const fn preset(
    base: ChartMeta,
    kind: ChartKind,
    name: &'static str,
    defaults: &'static [(&'static str, f64)],
) -> ChartMeta {
    ChartMeta {
        kind,
        name,
        schema: OptionSchema {
            owner: name,
            layers: base.schema.layers,
        },
        defaults,
        ..base
    }
}

const DONUT_HOLE: f64 = 0.5;

// Indexed by `ChartKind as usize`; keep in declaration order.
static CHART_TABLE: [ChartMeta; 23] = [
    chart(ChartKind::Annotation, "AnnotationChart", "annotationchart", &[BASE, ANNOTATION]),
    chart(ChartKind::Area, "AreaChart", CORECHART, &[BASE, AXIS, LINES, AREAS]),
    chart(ChartKind::Bar, "BarChart", CORECHART, &[BASE, AXIS, BARS]),
    chart(ChartKind::Bubble, "BubbleChart", CORECHART, &[BASE, AXIS, BUBBLE]),
    chart(ChartKind::Calendar, "Calendar", "calendar", &[BASE, CALENDAR]),
    chart(ChartKind::Candlestick, "CandlestickChart", CORECHART, &[BASE, AXIS, CANDLESTICK]),
    chart(ChartKind::Column, "ColumnChart", CORECHART, &[BASE, AXIS, BARS]),
    chart(ChartKind::Combo, "ComboChart", CORECHART, &[BASE, AXIS, LINES, AREAS, COMBO]),
    preset(
        chart(ChartKind::Pie, "PieChart", CORECHART, &[BASE, PIE]),
        ChartKind::Donut,
        "DonutChart",
        &[("pieHole", DONUT_HOLE)],
    ),
    chart(ChartKind::Gantt, "Gantt", "gantt", &[BASE, GANTT]),
    chart(ChartKind::Gauge, "Gauge", "gauge", &[BASE, GAUGE]),
    chart(ChartKind::Geo, "GeoChart", "geochart", &[BASE, GEO]),
    chart(ChartKind::Histogram, "Histogram", CORECHART, &[BASE, AXIS, HISTOGRAM]),
    chart(ChartKind::Line, "LineChart", CORECHART, &[BASE, AXIS, LINES]),
    chart(ChartKind::Org, "OrgChart", "orgchart", &[BASE, ORG]),
    chart(ChartKind::Pie, "PieChart", CORECHART, &[BASE, PIE]),
    chart(ChartKind::Sankey, "Sankey", "sankey", &[BASE, SANKEY]),
    chart(ChartKind::Scatter, "ScatterChart", CORECHART, &[BASE, AXIS, LINES]),
    chart(ChartKind::SteppedArea, "SteppedAreaChart", CORECHART, &[BASE, AXIS, AREAS]),
    chart(ChartKind::Table, "Table", "table", &[BASE, TABLE]),
    chart(ChartKind::Timeline, "Timeline", "timeline", &[BASE, TIMELINE]),
    chart(ChartKind::TreeMap, "TreeMap", "treemap", &[BASE, TREEMAP]),
    chart(ChartKind::WordTree, "WordTree", "wordtree", &[BASE, WORDTREE]),
];
