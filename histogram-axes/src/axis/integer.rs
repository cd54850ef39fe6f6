use super::{Axis, Uoflow};
use crate::Error;

/// One bin per integer in `[min, max]`, both ends included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Integer {
    bins: usize,
    min: i64,
    max: i64,
    uoflow: Uoflow,
    label: String,
}

impl Integer {
    pub fn try_new(min: i64, max: i64) -> Result<Self, Error> {
        if min > max {
            return Err(Error::InvalidAxis(format!(
                "integer axis needs min <= max, got [{min}, {max}]"
            )));
        }
        // the shape with under/overflow bins must fit a usize as well
        let bins = usize::try_from(max.abs_diff(min))
            .ok()
            .and_then(|d| d.checked_add(1))
            .filter(|b| b.checked_add(Uoflow::On.extra_bins()).is_some())
            .ok_or_else(|| {
                Error::InvalidAxis(format!(
                    "integer axis [{min}, {max}] has more bins than fit in a usize"
                ))
            })?;
        Ok(Self {
            bins,
            min,
            max,
            uoflow: Uoflow::default(),
            label: String::new(),
        })
    }

    pub fn new(min: i64, max: i64) -> Self {
        Self::try_new(min, max).unwrap()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_uoflow(mut self, uoflow: Uoflow) -> Self {
        self.uoflow = uoflow;
        self
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn uoflow(&self) -> Uoflow {
        self.uoflow
    }
}

impl Axis for Integer {
    const NAME: &'static str = "integer";

    #[inline(always)]
    fn shape(&self) -> usize {
        self.bins() + self.uoflow.extra_bins()
    }

    fn label(&self) -> &str {
        &self.label
    }
}
