/*!
 * Core types and data structures for the sfpack application
 */

/// One category of manifest members, corresponding to one scanned subfolder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeGroup {
    /// Manifest type name (ApexClass, ApexPage, ...)
    pub type_name: String,
    /// Member names in directory-listing order
    pub members: Vec<String>,
}

/// In-memory package descriptor prior to serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// One group per scanned subfolder, in folder-listing order
    pub groups: Vec<TypeGroup>,
    /// API version written into the version element
    pub api_version: String,
    /// Namespace of the Package root element
    pub xmlns: String,
}
