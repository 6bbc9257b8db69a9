//! The built-in organization list.

/// Organizations listed when no override is given, in output order.
pub const DEFAULT_ORGANIZATIONS: [&str; 11] = [
    "kubernetes",
    "kubernetes-client",
    "kubernetes-csi",
    "kubernetes-extensions",
    "kubernetes-federation",
    "kubernetes-incubator",
    "kubernetes-sidecars",
    "kubernetes-sig-testing",
    "kubernetes-sigs",
    "kubernetes-test",
    "kubernetes-tools",
];

/// Returns an owned copy of [`DEFAULT_ORGANIZATIONS`].
#[must_use]
pub fn default_organizations() -> Vec<String> {
    DEFAULT_ORGANIZATIONS.iter().map(|org| org.to_string()).collect()
}
