use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Clone, Debug, Default)]
pub struct TrieConfig {
    /// Upper bound on the nodes created below the root. Unbounded when `None`.
    #[builder(default)]
    pub max_nodes: Option<usize>,
}
