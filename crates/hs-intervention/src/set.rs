//! `InterventionSet` — the validated collection a scenario runs with.

use crate::{Intervention, InterventionError, InterventionResult};

/// A list of interventions that all passed [`Intervention::check`].
///
/// Immutable once built; the engine holds it for the full scenario.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterventionSet {
    items: Vec<Intervention>,
}

impl InterventionSet {
    /// The empty set (a baseline scenario).
    pub fn none() -> Self {
        Self::default()
    }

    /// Validate every intervention.  The first failure rejects the whole set
    /// and names the offending intervention.
    pub fn new(items: Vec<Intervention>) -> InterventionResult<Self> {
        for item in &items {
            item.check().map_err(|e| InterventionError::Rejected {
                name:   item.name.clone(),
                source: Box::new(e),
            })?;
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intervention> {
        self.items.iter()
    }

    /// Sum of implementation costs, in dollars.
    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(|i| i.implementation_cost).sum()
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }
}

impl TryFrom<Vec<Intervention>> for InterventionSet {
    type Error = InterventionError;

    fn try_from(items: Vec<Intervention>) -> InterventionResult<Self> {
        InterventionSet::new(items)
    }
}

impl<'a> IntoIterator for &'a InterventionSet {
    type Item = &'a Intervention;
    type IntoIter = std::slice::Iter<'a, Intervention>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
