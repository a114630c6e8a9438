#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Bridge call/response tests using stub resolvers.

use sigprint_lib::*;

/// Resolver backed by fixed values.
struct StubResolver {
    package: &'static str,
    signer: Result<Option<Vec<u8>>, &'static str>,
}

impl SignerResolver for StubResolver {
    fn package_name(&self) -> Result<String, SigprintError> {
        Ok(self.package.to_string())
    }

    fn first_signer(&self) -> Result<Option<Vec<u8>>, SigprintError> {
        match &self.signer {
            Ok(bytes) => Ok(bytes.clone()),
            Err(msg) => Err(SigprintError::Lookup((*msg).to_string())),
        }
    }
}

fn resolver_with(signer: Result<Option<Vec<u8>>, &'static str>) -> StubResolver {
    StubResolver {
        package: "com.example.app",
        signer,
    }
}

#[test]
fn get_signing_returns_mapping() {
    let resolver = resolver_with(Ok(Some(vec![0x01, 0x02, 0x03])));
    match handle_call(METHOD_GET_SIGNING, &resolver) {
        CallResponse::Success(result) => {
            assert_eq!(result.package_name, "com.example.app");
            assert_eq!(
                result.sha1,
                "70:37:80:71:98:C2:2A:7D:2B:08:07:37:1D:76:37:79:A8:4F:DF:CF"
            );
            assert_eq!(result.sha256.split(':').count(), 32);
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn absent_signer_yields_no_signature() {
    let resolver = resolver_with(Ok(None));
    match handle_call(METHOD_GET_SIGNING, &resolver) {
        CallResponse::Failure { code, .. } => assert_eq!(code, CODE_NO_SIGNATURE),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn empty_signer_yields_no_signature() {
    let resolver = resolver_with(Ok(Some(Vec::new())));
    match handle_call(METHOD_GET_SIGNING, &resolver) {
        CallResponse::Failure { code, .. } => assert_eq!(code, CODE_NO_SIGNATURE),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn lookup_failure_yields_err_with_message() {
    let resolver = resolver_with(Err("package manager unavailable"));
    match handle_call(METHOD_GET_SIGNING, &resolver) {
        CallResponse::Failure { code, message } => {
            assert_eq!(code, CODE_ERR);
            assert!(message.contains("package manager unavailable"));
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn package_name_failure_yields_err() {
    struct NoPackage;
    impl SignerResolver for NoPackage {
        fn package_name(&self) -> Result<String, SigprintError> {
            Err(SigprintError::Lookup("no running package".to_string()))
        }
        fn first_signer(&self) -> Result<Option<Vec<u8>>, SigprintError> {
            panic!("must not be called when the package name is unresolved");
        }
    }
    match handle_call(METHOD_GET_SIGNING, &NoPackage) {
        CallResponse::Failure { code, .. } => assert_eq!(code, CODE_ERR),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn unknown_method_not_implemented() {
    let resolver = resolver_with(Ok(Some(vec![0x01])));
    assert_eq!(
        handle_call("getVersion", &resolver),
        CallResponse::NotImplemented
    );
    assert_eq!(handle_call("", &resolver), CallResponse::NotImplemented);
}

#[test]
fn repeated_calls_are_idempotent() {
    let resolver = resolver_with(Ok(Some(vec![0xAA, 0xBB])));
    let first = handle_call(METHOD_GET_SIGNING, &resolver);
    let second = handle_call(METHOD_GET_SIGNING, &resolver);
    assert_eq!(first, second);
}
