//! Filter state with separate editing and applied values.
//!
//! Edits accumulate in `editing` and reach the backend only through
//! `apply()` (or `set_and_apply` for dropdowns). The fetch layer must read
//! `applied()` exclusively, so half-typed filter input never leaks into a
//! request. The apply policy is uniform across pages: free-text and date
//! inputs are explicit-apply, enumerated dropdowns apply immediately.

#[derive(Debug, Clone, Default)]
pub struct FilterForm<F> {
    editing: F,
    applied: F,
}

impl<F: Clone + Default + PartialEq> FilterForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing(&self) -> &F {
        &self.editing
    }

    /// The filter set the last fetch was issued with.
    pub fn applied(&self) -> &F {
        &self.applied
    }

    /// Mutate the editing copy. Never triggers a fetch by itself.
    pub fn edit(&mut self, f: impl FnOnce(&mut F)) {
        f(&mut self.editing);
    }

    /// Push editing values into the applied set. Returns whether the
    /// applied set actually changed.
    pub fn apply(&mut self) -> bool {
        let changed = self.applied != self.editing;
        self.applied = self.editing.clone();
        changed
    }

    /// Edit and apply in one step — the immediate-apply path for dropdowns.
    pub fn set_and_apply(&mut self, f: impl FnOnce(&mut F)) {
        f(&mut self.editing);
        self.applied = self.editing.clone();
    }

    /// Both editing and applied back to the default object, in one step.
    pub fn reset(&mut self) {
        self.editing = F::default();
        self.applied = F::default();
    }

    /// True while there are edits the user has not applied yet.
    pub fn is_dirty(&self) -> bool {
        self.editing != self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestFilters {
        search: String,
        status: Option<&'static str>,
    }

    impl Default for TestFilters {
        fn default() -> Self {
            Self {
                search: String::new(),
                status: None,
            }
        }
    }

    #[test]
    fn test_edits_do_not_touch_applied() {
        let mut form: FilterForm<TestFilters> = FilterForm::new();
        form.edit(|f| f.search = "acc-17".into());
        form.edit(|f| f.status = Some("Approved"));
        // Any number of edits without apply: the applied set is untouched.
        assert_eq!(*form.applied(), TestFilters::default());
        assert!(form.is_dirty());
    }

    #[test]
    fn test_apply_pushes_edits() {
        let mut form: FilterForm<TestFilters> = FilterForm::new();
        form.edit(|f| f.search = "acc-17".into());
        assert!(form.apply());
        assert_eq!(form.applied().search, "acc-17");
        assert!(!form.is_dirty());
        // Applying again with no further edits is a no-op.
        assert!(!form.apply());
    }

    #[test]
    fn test_set_and_apply_is_immediate() {
        let mut form: FilterForm<TestFilters> = FilterForm::new();
        form.set_and_apply(|f| f.status = Some("Paid"));
        assert_eq!(form.applied().status, Some("Paid"));
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_reset_restores_the_default_object() {
        let mut form: FilterForm<TestFilters> = FilterForm::new();
        form.set_and_apply(|f| {
            f.search = "overdue".into();
            f.status = Some("Approved");
        });
        form.edit(|f| f.search = "something else".into());
        form.reset();
        assert_eq!(*form.editing(), TestFilters::default());
        assert_eq!(*form.applied(), TestFilters::default());
        assert!(!form.is_dirty());
    }
}
