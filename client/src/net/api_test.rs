use super::*;

#[test]
fn document_request_failed_message_formats_status() {
    assert_eq!(document_request_failed_message(404), "document request failed: 404");
}

#[test]
fn document_decode_failed_message_names_identifier() {
    assert_eq!(
        document_decode_failed_message("/markdown/a.md", "invalid utf-8"),
        "document /markdown/a.md is not readable text: invalid utf-8"
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_document_is_unavailable_without_browser() {
    let result = futures::executor::block_on(fetch_document("/markdown/introduction.md"));
    assert_eq!(result, Err("not available on server".to_owned()));
}
