use tinyserve::http::response::{Response, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    assert_eq!(StatusCode::HttpVersionNotSupported.as_u16(), 505);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
    assert_eq!(
        StatusCode::HttpVersionNotSupported.reason_phrase(),
        "HTTP Version Not Supported"
    );
}

#[test]
fn test_response_ok_helper() {
    let response = Response::ok();

    assert!(response.is_ok());
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.reason_phrase(), "OK");
}

#[test]
fn test_response_not_found_helper() {
    let response = Response::not_found();

    assert!(!response.is_ok());
    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.reason_phrase(), "Not Found");
}
