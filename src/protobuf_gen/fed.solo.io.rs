/// Metadata applied to every resource a federated template is placed as.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TemplateMetadata {
    #[prost(map = "string, string", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub annotations: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    #[prost(map = "string, string", tag = "2")]
    #[serde(with = "crate::message::map_entries")]
    pub labels: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    /// Name of the placed resource. Defaults to the name of the federated resource.
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
}
