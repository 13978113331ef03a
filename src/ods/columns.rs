//! Logical column lookup over run-length encoded column definitions.

use super::model::CompressedColumn;

/// Maps a logical column index to the declared column covering it.
///
/// Lookup is by absolute index, so a span that starts inside one repeat group
/// and runs into the next resolves each position against its own definition.
#[derive(Debug, Clone)]
pub struct ColumnMap<'a> {
    columns: &'a [CompressedColumn],
    /// Exclusive logical end index of each declared column.
    ends: Vec<usize>,
}

impl<'a> ColumnMap<'a> {
    pub fn new(columns: &'a [CompressedColumn]) -> Self {
        let ends = columns
            .iter()
            .scan(0usize, |end, column| {
                *end = end.saturating_add(column.repeat_count());
                Some(*end)
            })
            .collect();
        Self { columns, ends }
    }

    /// The declared column covering `index`, or `None` past the last declared column.
    pub fn get(&self, index: usize) -> Option<&'a CompressedColumn> {
        let slot = self.ends.partition_point(|&end| end <= index);
        self.columns.get(slot)
    }

    /// Number of logical columns declared.
    pub fn width(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(style: &str, repeat: u32) -> CompressedColumn {
        CompressedColumn {
            repeat,
            style_name: Some(style.to_string()),
            default_cell_style_name: None,
        }
    }

    fn style_at<'a>(map: &ColumnMap<'a>, index: usize) -> Option<&'a str> {
        map.get(index).and_then(|c| c.style_name.as_deref())
    }

    #[test]
    fn test_repeat_groups() {
        let columns = [column("co1", 0), column("co2", 3), column("co3", 1)];
        let map = ColumnMap::new(&columns);
        assert_eq!(map.width(), 5);
        assert_eq!(style_at(&map, 0), Some("co1"));
        assert_eq!(style_at(&map, 1), Some("co2"));
        assert_eq!(style_at(&map, 3), Some("co2"));
        assert_eq!(style_at(&map, 4), Some("co3"));
        assert_eq!(style_at(&map, 5), None);
    }

    #[test]
    fn test_empty() {
        let map = ColumnMap::new(&[]);
        assert_eq!(map.width(), 0);
        assert!(map.get(0).is_none());
    }
}
