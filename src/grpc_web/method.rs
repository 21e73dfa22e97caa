/// Static description of one RPC, emitted per method into the `<service>_methods` modules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub service_name: &'static str,
    pub method_name: &'static str,
    pub request_type: &'static str,
    pub response_type: &'static str,
    pub request_stream: bool,
    pub response_stream: bool,
}

impl MethodDescriptor {
    /// `/package.Service/Method`
    pub fn path(&self) -> String {
        format!("/{}/{}", self.service_name, self.method_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_joins_service_and_method() {
        let method = MethodDescriptor {
            service_name: "test.EchoService",
            method_name: "Echo",
            request_type: "test.Echo",
            response_type: "test.Echo",
            request_stream: false,
            response_stream: false,
        };

        assert_eq!(method.path(), "/test.EchoService/Echo");
    }
}
