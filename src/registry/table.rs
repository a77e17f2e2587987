// src/registry/table.rs
use crate::error::{FragmentError, Result};
use crate::registry::FragmentType;
use log::warn;
use std::collections::BTreeMap;

/// Name returned for any tag that has no registered name
pub const INVALID_TYPE_NAME: &str = "INVALID";

/// Mapping from [`FragmentType`] tags to canonical uppercase names.
///
/// Names are used e.g. as storage group names, so they are normalised to
/// uppercase on registration and lookups by name ignore case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentTypeRegistry {
    names: BTreeMap<FragmentType, String>,
}

impl FragmentTypeRegistry {
    pub fn new() -> Self {
        FragmentTypeRegistry { names: BTreeMap::new() }
    }

    /// Register a name for `ty`, replacing any previous name for the same tag
    pub fn register(&mut self, ty: FragmentType, name: impl Into<String>) -> Result<()> {
        if ty.is_invalid() {
            return Err(FragmentError::ReservedFragmentType);
        }

        let name = name.into();
        if name.trim().is_empty() {
            return Err(FragmentError::InvalidTypeName(name));
        }
        let name = name.to_ascii_uppercase();

        if let Some((other, _)) = self.names.iter().find(|(t, n)| **t != ty && **n == name) {
            warn!(
                "fragment type name {} registered for both {} and {}; name lookup is ambiguous",
                name, other, ty
            );
        }

        if let Some(previous) = self.names.insert(ty, name) {
            warn!("fragment type {} re-registered, replacing name {}", ty, previous);
        }
        Ok(())
    }

    /// Builder form of [`register`](Self::register)
    pub fn with(mut self, ty: FragmentType, name: impl Into<String>) -> Result<Self> {
        self.register(ty, name)?;
        Ok(self)
    }

    pub fn name(&self, ty: FragmentType) -> Option<&str> {
        self.names.get(&ty).map(String::as_str)
    }

    /// Registered name for `ty`, or `"INVALID"` if there is none
    pub fn type_to_name(&self, ty: FragmentType) -> String {
        self.name(ty).unwrap_or(INVALID_TYPE_NAME).to_string()
    }

    /// Look up a tag by name, ignoring case.
    ///
    /// Returns `FragmentType::INVALID` when no name matches. If two tags share
    /// a name, which one is returned is unspecified.
    pub fn name_to_type(&self, name: &str) -> FragmentType {
        let name = name.to_ascii_uppercase();
        self.names
            .iter()
            .find(|(_, registered)| **registered == name)
            .map(|(ty, _)| *ty)
            .unwrap_or(FragmentType::INVALID)
    }

    pub fn contains(&self, ty: FragmentType) -> bool {
        self.names.contains_key(&ty)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FragmentType, &str)> {
        self.names.iter().map(|(ty, name)| (*ty, name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TPC: FragmentType = FragmentType::new(1);
    const PDS: FragmentType = FragmentType::new(2);

    fn sample() -> FragmentTypeRegistry {
        FragmentTypeRegistry::new()
            .with(TPC, "TPC")
            .unwrap()
            .with(PDS, "pds")
            .unwrap()
    }

    #[test]
    fn test_empty_registry() {
        let reg = FragmentTypeRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.type_to_name(TPC), "INVALID");
        assert_eq!(reg.type_to_name(FragmentType::INVALID), "INVALID");
        assert_eq!(reg.name_to_type("nonexistent"), FragmentType::INVALID);
    }

    #[test]
    fn test_names_stored_uppercase() {
        let reg = sample();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.name(PDS), Some("PDS"));
        assert_eq!(reg.type_to_name(TPC), "TPC");
    }

    #[test]
    fn test_name_lookup_ignores_case() {
        let reg = sample();
        for input in ["tpc", "TPC", "Tpc", "tPc"] {
            assert_eq!(reg.name_to_type(input), TPC);
        }
        assert_eq!(reg.name_to_type("Pds"), PDS);
        assert_eq!(reg.name_to_type("nonexistent"), FragmentType::INVALID);
    }

    #[test]
    fn test_only_ascii_letters_are_uppercased() {
        let reg = FragmentTypeRegistry::new()
            .with(FragmentType::new(5), "straße_daq")
            .unwrap();
        assert_eq!(reg.name(FragmentType::new(5)), Some("STRAßE_DAQ"));
        assert_eq!(reg.name_to_type("straße_daq"), FragmentType::new(5));
        assert_eq!(reg.name_to_type("STRASSE_DAQ"), FragmentType::INVALID);
    }

    #[test]
    fn test_unknown_tag_is_invalid_name() {
        let reg = sample();
        assert_eq!(reg.type_to_name(FragmentType::new(99)), INVALID_TYPE_NAME);
        assert!(!reg.contains(FragmentType::new(99)));
    }

    #[test]
    fn test_register_rejects_invalid_tag_and_empty_name() {
        let mut reg = FragmentTypeRegistry::new();
        assert!(matches!(
            reg.register(FragmentType::INVALID, "BAD"),
            Err(FragmentError::ReservedFragmentType)
        ));
        assert!(matches!(
            reg.register(TPC, "  "),
            Err(FragmentError::InvalidTypeName(_))
        ));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_reregister_replaces_name() {
        let mut reg = sample();
        reg.register(TPC, "wib").unwrap();
        assert_eq!(reg.type_to_name(TPC), "WIB");
        assert_eq!(reg.name_to_type("tpc"), FragmentType::INVALID);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_duplicate_names_resolve_to_one_of_them() {
        let reg = sample().with(FragmentType::new(3), "TPC").unwrap();
        let found = reg.name_to_type("tpc");
        assert!(found == TPC || found == FragmentType::new(3));
    }

    #[test]
    fn test_iter() {
        let reg = sample();
        let entries: Vec<_> = reg.iter().collect();
        assert_eq!(entries, vec![(TPC, "TPC"), (PDS, "PDS")]);
    }
}
