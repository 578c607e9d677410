// HTML document assembly and response building
use crate::domain::element::{Element, VerticalLayout, escape};
use crate::domain::page::PageDescriptor;
use axum::{
    body::Body,
    http::{HeaderValue, Response, StatusCode, header},
};

/// Assemble a complete HTML document for a page: title and asset declarations
/// in the head, the rendered element tree in the body.
pub fn render_document(descriptor: &PageDescriptor, body: &VerticalLayout) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("<title>");
    out.push_str(&escape(&descriptor.title));
    out.push_str("</title>\n");
    for asset in &descriptor.assets {
        if let Some(tag) = asset.head_markup() {
            out.push_str(&tag);
            out.push('\n');
        }
    }
    out.push_str("</head>\n<body>\n");
    Element::Layout(body.clone()).write_html(&mut out);
    out.push_str("\n</body>\n</html>\n");
    out
}

/// Build a `text/html` response for rendered markup.
pub fn html_response(markup: String) -> Result<Response<Body>, StatusCode> {
    let bytes = markup.into_bytes();
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(
            header::CONTENT_LENGTH,
            HeaderValue::from_str(&bytes.len().to_string())
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?,
        )
        .body(Body::from(bytes))
        .map_err(|e| {
            eprintln!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
