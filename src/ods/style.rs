//! Style definitions and name lookup.
//!
//! Only the properties the grid needs are kept. Every field is optional: an
//! absent attribute is `None`, which lets the cascade tell "unset" apart from an
//! explicitly empty value.

use std::collections::HashMap;

/// `style:table-column-properties`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnProperties {
    /// `style:column-width`
    pub width: Option<String>,
    /// `fo:break-before`
    pub break_before: Option<String>,
}

/// `style:table-row-properties`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowProperties {
    /// `style:row-height`
    pub height: Option<String>,
    /// `fo:break-before`
    pub break_before: Option<String>,
    /// `style:use-optimal-row-height`
    pub use_optimal_height: Option<bool>,
}

/// `style:table-cell-properties`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellProperties {
    pub border_top: Option<String>,
    pub border_bottom: Option<String>,
    pub border_left: Option<String>,
    pub border_right: Option<String>,
    /// `fo:background-color`
    pub background_color: Option<String>,
    /// `style:vertical-align`
    pub vertical_align: Option<String>,
    /// `fo:padding`
    pub padding: Option<String>,
}

/// `style:text-properties`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextProperties {
    /// `style:font-name`
    pub font_name: Option<String>,
    /// `fo:font-size`
    pub font_size: Option<String>,
    /// `fo:font-weight`
    pub font_weight: Option<String>,
    /// `fo:color`
    pub color: Option<String>,
}

/// `style:paragraph-properties`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphProperties {
    /// `fo:text-align`
    pub text_align: Option<String>,
    /// `fo:margin-left`
    pub margin_left: Option<String>,
}

/// A named `style:style` element.
///
/// A style that does not carry a given property element has that sub-record
/// left at its default, with every attribute unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDefinition {
    pub name: String,
    /// `style:family`
    pub family: Option<String>,
    pub column: ColumnProperties,
    pub row: RowProperties,
    pub cell: CellProperties,
    pub text: TextProperties,
    pub paragraph: ParagraphProperties,
}

impl StyleDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Read-only collection of style definitions with lookup by name.
///
/// When several definitions share a name the first one declared wins.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    styles: Vec<StyleDefinition>,
    by_name: HashMap<String, usize>,
    unstyled: StyleDefinition,
}

impl StyleTable {
    pub fn new(styles: Vec<StyleDefinition>) -> Self {
        let mut by_name = HashMap::with_capacity(styles.len());
        for (index, style) in styles.iter().enumerate() {
            by_name.entry(style.name.clone()).or_insert(index);
        }
        Self {
            styles,
            by_name,
            unstyled: StyleDefinition::default(),
        }
    }

    /// Find a style by name.
    pub fn get(&self, name: &str) -> Option<&StyleDefinition> {
        self.by_name.get(name).map(|&i| &self.styles[i])
    }

    /// Find a style by optional name, falling back to an all-unset style.
    ///
    /// An unknown or missing name is not an error; it means "apply defaults".
    pub fn lookup(&self, name: Option<&str>) -> &StyleDefinition {
        name.and_then(|n| self.get(n)).unwrap_or(&self.unstyled)
    }

    /// All definitions in declaration order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl FromIterator<StyleDefinition> for StyleTable {
    fn from_iter<I: IntoIterator<Item = StyleDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_width(name: &str, width: &str) -> StyleDefinition {
        let mut style = StyleDefinition::new(name);
        style.column.width = Some(width.to_string());
        style
    }

    #[test]
    fn test_lookup_by_name() {
        let table = StyleTable::new(vec![with_width("co1", "2cm"), with_width("co2", "3cm")]);
        assert_eq!(
            table.get("co2").and_then(|s| s.column.width.as_deref()),
            Some("3cm")
        );
        assert!(table.get("co3").is_none());
    }

    #[test]
    fn test_first_declared_wins() {
        let table = StyleTable::new(vec![with_width("co1", "2cm"), with_width("co1", "9cm")]);
        assert_eq!(table.lookup(Some("co1")).column.width.as_deref(), Some("2cm"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_unknown_name_is_unstyled() {
        let table: StyleTable = [with_width("co1", "2cm")].into_iter().collect();
        assert_eq!(table.lookup(Some("missing")), &StyleDefinition::default());
        assert_eq!(table.lookup(None), &StyleDefinition::default());
    }
}
