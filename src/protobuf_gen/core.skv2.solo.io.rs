/// Resource reference for an object
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObjectRef {
    /// name of the resource being referenced
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// namespace of the resource being referenced
    #[prost(string, tag = "2")]
    pub namespace: ::prost::alloc::string::String,
}
/// Resource reference for a cross-cluster-scoped object
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClusterObjectRef {
    /// name of the resource being referenced
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// namespace of the resource being referenced
    #[prost(string, tag = "2")]
    pub namespace: ::prost::alloc::string::String,
    /// name of the cluster in which the resource exists
    #[prost(string, tag = "3")]
    pub cluster_name: ::prost::alloc::string::String,
}
