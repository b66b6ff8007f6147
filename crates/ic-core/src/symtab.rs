//! A thin facade over the symbol table the translator relies on.
//!
//! Real semantic analysis (type checking, full field-list construction) is
//! out of scope; this module gives the translator exactly the capability
//! set it needs: scope push/pop, name resolution, parameter injection, and
//! function registration with a definition/declaration flag. Variable ids
//! handed out here share one id space with compiler-generated temporaries
//! (see [`crate::id::VarIdAllocator`]) -- invariant 4.

use std::collections::HashMap;

use thiserror::Error;

use crate::ast::Param;
use crate::id::{VarId, VarIdAllocator};

/// Failure registering a function -- the translator treats this as "skip
/// code generation for this ext-def", not a hard error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymtabError {
    #[error("function '{0}' is already defined")]
    DuplicateFunction(String),
}

/// A registered function: whether it has a body yet, and its parameters in
/// declaration order (used to validate call sites, though this core does
/// not type-check calls itself).
#[derive(Debug, Clone)]
pub struct FunctionEntry {
    pub defined: bool,
    pub param_count: usize,
}

/// Scoped name -> variable id resolution plus the function registry.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<HashMap<String, VarId>>,
    functions: HashMap<String, FunctionEntry>,
    ids: VarIdAllocator,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![HashMap::new()],
            functions: HashMap::new(),
            ids: VarIdAllocator::new(),
        }
    }

    /// Enter a new, empty scope nested inside the current one.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Leave the innermost scope. Panics if called with only the root scope
    /// left -- that would be a translator bug, not a user error.
    pub fn pop_scope(&mut self) {
        assert!(self.scopes.len() > 1, "cannot pop the root scope");
        self.scopes.pop();
    }

    /// Declare a new variable in the current (innermost) scope, allocating
    /// a fresh id for it. Used for both local declarations and parameters.
    pub fn declare_var(&mut self, name: &str) -> VarId {
        let id = self.ids.alloc();
        self.scopes
            .last_mut()
            .expect("at least one scope is always present")
            .insert(name.to_string(), id);
        id
    }

    /// Inject a function's parameters into the current scope, in order,
    /// returning their freshly allocated ids in the same order.
    pub fn insert_params(&mut self, params: &[Param]) -> Vec<VarId> {
        params.iter().map(|p| self.declare_var(&p.name)).collect()
    }

    /// Resolve a name through the scope stack, innermost first.
    pub fn find(&self, name: &str) -> Option<VarId> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
    }

    /// Allocate a fresh compiler-generated temporary. Not inserted into any
    /// scope -- temporaries are never looked up by name.
    pub fn fresh_temp(&mut self) -> VarId {
        self.ids.fresh_temp()
    }

    /// Register a function by name. `definition` is true iff this ext-def
    /// has a compound-statement body (false for a bare `;` declaration).
    /// Fails if a *definition* for this name already exists; re-declaring
    /// (without a body) or re-defining a previously-declared-only function
    /// is allowed.
    pub fn register_function(
        &mut self,
        name: &str,
        definition: bool,
        params: &[Param],
    ) -> Result<(), SymtabError> {
        if let Some(existing) = self.functions.get(name) {
            if existing.defined && definition {
                return Err(SymtabError::DuplicateFunction(name.to_string()));
            }
        }
        let entry = self
            .functions
            .entry(name.to_string())
            .or_insert_with(|| FunctionEntry {
                defined: false,
                param_count: params.len(),
            });
        entry.param_count = params.len();
        if definition {
            entry.defined = true;
        }
        Ok(())
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Specifier;

    fn param(name: &str) -> Param {
        Param {
            specifier: Specifier::Int,
            name: name.to_string(),
        }
    }

    #[test]
    fn declare_then_find_in_same_scope() {
        let mut st = SymbolTable::new();
        let id = st.declare_var("a");
        assert_eq!(st.find("a"), Some(id));
    }

    #[test]
    fn inner_scope_shadows_outer() {
        let mut st = SymbolTable::new();
        let outer = st.declare_var("x");
        st.push_scope();
        let inner = st.declare_var("x");
        assert_ne!(outer, inner);
        assert_eq!(st.find("x"), Some(inner));
        st.pop_scope();
        assert_eq!(st.find("x"), Some(outer));
    }

    #[test]
    fn unresolved_name_is_none() {
        let st = SymbolTable::new();
        assert_eq!(st.find("nope"), None);
    }

    #[test]
    fn temp_ids_do_not_collide_with_named_ids() {
        let mut st = SymbolTable::new();
        let named = st.declare_var("a");
        let temp = st.fresh_temp();
        assert_ne!(named, temp);
    }

    #[test]
    fn insert_params_preserves_order() {
        let mut st = SymbolTable::new();
        let params = vec![param("x"), param("y")];
        let ids = st.insert_params(&params);
        assert_eq!(ids.len(), 2);
        assert_eq!(st.find("x"), Some(ids[0]));
        assert_eq!(st.find("y"), Some(ids[1]));
    }

    #[test]
    fn duplicate_function_definition_is_rejected() {
        let mut st = SymbolTable::new();
        assert!(st.register_function("f", true, &[]).is_ok());
        assert_eq!(
            st.register_function("f", true, &[]),
            Err(SymtabError::DuplicateFunction("f".to_string()))
        );
    }

    #[test]
    fn declaration_then_definition_is_allowed() {
        let mut st = SymbolTable::new();
        assert!(st.register_function("f", false, &[]).is_ok());
        assert!(st.register_function("f", true, &[]).is_ok());
    }
}
