//! Test-only helpers: minimal but structurally valid PDF documents, plus a
//! local HTTP server that hands out fixture bytes.

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

/// Single-page PDF whose page shows `text` in Helvetica.
pub(crate) fn pdf_with_text(text: &str) -> Vec<u8> {
    pdf_with_pages(&[text])
}

/// Multi-page PDF, one entry per page. An empty entry produces a page with
/// an empty content stream, i.e. a page with no extractable text.
///
/// Object layout: 1 catalog, 2 page tree, 3 font, then a page object and a
/// content stream per page. Cross-reference offsets are computed from the
/// actual byte positions so strict parsers accept the file.
pub(crate) fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let total_objects = 3 + 2 * pages.len();
    let mut buf = String::from("%PDF-1.4\n");
    let mut offsets: Vec<usize> = Vec::with_capacity(total_objects);

    let kids = (0..pages.len())
        .map(|k| format!("{} 0 R", 4 + 2 * k))
        .collect::<Vec<_>>()
        .join(" ");

    offsets.push(buf.len());
    buf.push_str("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    offsets.push(buf.len());
    buf.push_str(&format!(
        "2 0 obj\n<< /Type /Pages /Kids [{kids}] /Count {} >>\nendobj\n",
        pages.len()
    ));

    offsets.push(buf.len());
    buf.push_str(
        "3 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>\nendobj\n",
    );

    for (k, page) in pages.iter().enumerate() {
        let page_obj = 4 + 2 * k;
        let contents_obj = 5 + 2 * k;

        offsets.push(buf.len());
        buf.push_str(&format!(
            "{page_obj} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << /Font << /F1 3 0 R >> >> /Contents {contents_obj} 0 R >>\nendobj\n"
        ));

        let content = if page.is_empty() {
            String::new()
        } else {
            format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", escape_text(page))
        };
        offsets.push(buf.len());
        buf.push_str(&format!(
            "{contents_obj} 0 obj\n<< /Length {} >>\nstream\n{content}\nendstream\nendobj\n",
            content.len()
        ));
    }

    let xref_offset = buf.len();
    buf.push_str(&format!("xref\n0 {}\n", total_objects + 1));
    buf.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        buf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    buf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        total_objects + 1
    ));

    buf.into_bytes()
}

// Literal strings delimit with parentheses and escape with backslash.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '(' | ')' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Spawns a throwaway HTTP server on a random local port that serves `body`
/// at `/resume.pdf`, and returns its base URL. Any other path is a 404.
pub(crate) async fn serve_bytes(body: Vec<u8>) -> String {
    let app = Router::new().route("/resume.pdf", get(move || async move { body }));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture server");
    let addr = listener.local_addr().expect("fixture server address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fixture server");
    });
    format!("http://{addr}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_pdf_has_header_and_trailer() {
        let bytes = pdf_with_text("hello");
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_escapes_string_delimiters() {
        assert_eq!(escape_text(r"C++ (backend)"), r"C++ \(backend\)");
        assert_eq!(escape_text(r"a\b"), r"a\\b");
    }
}
