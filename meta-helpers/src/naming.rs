//! Symbol formatting filters.
//!
//! These turn dotted, camel-cased metadata names into identifiers for
//! generated C-style code.

/// Convert an entry name into an uppercase symbol.
///
/// Every uppercase character is prefixed with an underscore, the result is
/// uppercased and periods become underscores.
///
/// ```
/// use metagen_helpers::naming::csym;
///
/// assert_eq!(csym("abcDef.xyz"), "ABC_DEF_XYZ");
/// ```
pub fn csym(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_uppercase() {
            out.push('_');
        }
        out.push(c);
    }
    out.to_uppercase().replace('.', "_")
}

/// Convert an entry name into a lowercase symbol.
///
/// ```
/// use metagen_helpers::naming::csyml;
///
/// assert_eq!(csyml("abcDef.xyz"), "abc_def_xyz");
/// ```
pub fn csyml(name: &str) -> String {
    csym(name).to_lowercase()
}

/// Map a value type token to its type tag (e.g. "int32" -> "TYPE_INT32").
///
/// The token is not validated.
pub fn ctype_enum(what: &str) -> String {
    format!("TYPE_{}", what.to_uppercase())
}
