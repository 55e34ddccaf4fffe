use fxhash::FxHashSet;

///
/// Set of sample ids that remembers the order in which ids were first seen.
///
/// This order becomes the order of the sample columns in the output.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleIds {
    ordered: Vec<String>,
    seen: FxHashSet<String>,
}

impl SampleIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id`, returning `false` when it was already present.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            return false;
        }
        self.seen.insert(id.to_string());
        self.ordered.push(id.to_string());
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

impl<S: AsRef<str>> FromIterator<S> for SampleIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut ids = SampleIds::new();
        for id in iter {
            ids.insert(id.as_ref());
        }
        ids
    }
}
