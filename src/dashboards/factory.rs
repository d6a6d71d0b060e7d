use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::dashboards::filters::{
    CATEGORY, CHART_RANGE, DATE_RANGE, Filter, FilterMeta, LabelOrIndex, NUMBER_RANGE, STRING,
};
use crate::foundation::error::{VizError, VizResult};
use crate::support::options::OptionMap;

/// Builds one filter variant from a column and its options.
pub type FilterConstructor = fn(LabelOrIndex, OptionMap) -> VizResult<Filter>;

static DEFAULT_FACTORY: LazyLock<FilterFactory> = LazyLock::new(FilterFactory::default);

/// Resolves filter type names to filter variants.
///
/// Variants are looked up in a registry keyed by type tag, so new variants are added with
/// [`FilterFactory::register`] instead of touching the lookup.
#[derive(Clone)]
pub struct FilterFactory {
    registry: IndexMap<&'static str, FilterConstructor>,
}

impl Default for FilterFactory {
    fn default() -> Self {
        let mut factory = Self::empty();
        factory
            .register_meta(&CATEGORY, |c, o| Filter::new(&CATEGORY, c, o))
            .register_meta(&CHART_RANGE, |c, o| Filter::new(&CHART_RANGE, c, o))
            .register_meta(&DATE_RANGE, |c, o| Filter::new(&DATE_RANGE, c, o))
            .register_meta(&NUMBER_RANGE, |c, o| Filter::new(&NUMBER_RANGE, c, o))
            .register_meta(&STRING, |c, o| Filter::new(&STRING, c, o));
        factory
    }
}

impl std::fmt::Debug for FilterFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterFactory")
            .field("types", &self.registry.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FilterFactory {
    /// Factory with no registered variants.
    pub fn empty() -> Self {
        Self {
            registry: IndexMap::new(),
        }
    }

    /// Register (or replace) the constructor for `type_tag`.
    pub fn register(&mut self, type_tag: &'static str, ctor: FilterConstructor) -> &mut Self {
        if self.registry.insert(type_tag, ctor).is_some() {
            tracing::debug!(type_tag, "replacing registered filter constructor");
        }
        self
    }

    fn register_meta(&mut self, meta: &'static FilterMeta, ctor: FilterConstructor) -> &mut Self {
        self.register(meta.type_tag, ctor)
    }

    /// Registered type tags, in registration order.
    pub fn types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.registry.keys().copied()
    }

    pub fn is_registered(&self, type_tag: &str) -> bool {
        self.registry.contains_key(type_tag)
    }

    /// Build a filter through the process-wide default registry.
    pub fn create(
        type_name: &str,
        column: impl Into<LabelOrIndex>,
        options: OptionMap,
    ) -> VizResult<Filter> {
        DEFAULT_FACTORY.build(type_name, column, options)
    }

    /// Build a filter through this registry.
    #[tracing::instrument(skip(self, column, options))]
    pub fn build(
        &self,
        type_name: &str,
        column: impl Into<LabelOrIndex>,
        options: OptionMap,
    ) -> VizResult<Filter> {
        let tag = normalize_type_name(type_name);
        let ctor = self
            .registry
            .get(tag.as_str())
            .ok_or_else(|| VizError::InvalidFilterType(type_name.to_string()))?;
        ctor(column.into(), options)
    }
}

/// Canonicalize a filter type name into a type tag.
///
/// Every `Filter` substring is dropped. Names containing `range` in any case get `Range`
/// capitalized and their first letter upper-cased, so `daterange` becomes `DateRange`. Other
/// names are left as they are; tag matching stays case-sensitive.
pub fn normalize_type_name(type_name: &str) -> String {
    let stripped = type_name.replace("Filter", "");
    let Some(pos) = stripped.to_ascii_lowercase().find("range") else {
        return stripped;
    };

    let mut tag = String::with_capacity(stripped.len());
    tag.push_str(&stripped[..pos]);
    tag.push_str("Range");
    tag.push_str(&stripped[pos + "range".len()..]);

    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => tag,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dashboards/factory.rs"]
mod tests;
