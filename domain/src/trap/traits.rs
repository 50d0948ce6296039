//! Trap validation traits
//!
//! Pure domain logic for cross-referencing extracted argument names
//! against a [`TrapTable`], without any I/O.

use super::entities::TrapTable;

/// Validator for extracted parameter names
///
/// Both checks are deliberately permissive for tools absent from the
/// table: the table is necessarily incomplete, so unknown tools return
/// empty results rather than raising false positives.
pub trait ParamValidator {
    /// Names from `params` that appear in the tool's known-wrong set.
    ///
    /// Each hit is returned as `(wrong_name, suggestions)` where the
    /// suggestion is the tool's full accepted list joined with `", "` —
    /// ambiguity is surfaced to the reader, not resolved here.
    fn wrong_names(&self, tool_id: &str, params: &[String]) -> Vec<(String, String)>;

    /// Required names missing from `params`, in registration order.
    fn missing_required(&self, tool_id: &str, params: &[String]) -> Vec<String>;
}

/// [`ParamValidator`] backed by a [`TrapTable`]
#[derive(Debug, Clone, Default)]
pub struct TableValidator {
    table: TrapTable,
}

impl TableValidator {
    pub fn new(table: TrapTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TrapTable {
        &self.table
    }
}

impl ParamValidator for TableValidator {
    fn wrong_names(&self, tool_id: &str, params: &[String]) -> Vec<(String, String)> {
        let Some(entry) = self.table.get(tool_id) else {
            return Vec::new();
        };

        params
            .iter()
            .filter(|param| entry.known_wrong.contains(param))
            .map(|param| (param.clone(), entry.accepted_joined()))
            .collect()
    }

    fn missing_required(&self, tool_id: &str, params: &[String]) -> Vec<String> {
        let Some(entry) = self.table.get(tool_id) else {
            return Vec::new();
        };

        entry
            .required
            .iter()
            .filter(|required| !params.contains(required))
            .cloned()
            .collect()
    }
}
