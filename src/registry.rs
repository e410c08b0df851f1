/*!
 * Metadata folder to manifest type name mapping
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Metadata folders recognized by the manifest builder
pub static FOLDER_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("aura", "AuraDefinitionBundle"),
        ("classes", "ApexClass"),
        ("components", "ApexComponent"),
        ("pages", "ApexPage"),
        ("triggers", "ApexTrigger"),
        ("staticresources", "StaticResource"),
        ("objects", "CustomObject"),
        ("profiles", "Profile"),
    ])
});

/// Look up the manifest type name for a metadata folder.
///
/// Returns `None` for folders outside the fixed table.
pub fn lookup(folder_name: &str) -> Option<&'static str> {
    FOLDER_TYPES.get(folder_name).copied()
}
