use super::Axis;

/// One bin per category name. An empty category list is allowed and addresses
/// no bins at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Category {
    categories: Vec<String>,
    label: String,
}

impl Category {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Bin index of `name`, if it is one of the categories.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == name)
    }
}

impl Axis for Category {
    const NAME: &'static str = "category";

    #[inline(always)]
    fn shape(&self) -> usize {
        self.categories.len()
    }

    fn label(&self) -> &str {
        &self.label
    }
}
