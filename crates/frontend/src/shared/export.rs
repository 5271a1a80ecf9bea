//! Client-side CSV export and browser downloads.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be exported as CSV rows.
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Serialize the loaded rows to CSV and trigger a browser download.
///
/// Synchronous end to end; callers surface the error through the toast
/// channel, it must never escape as an uncaught rejection.
pub fn export_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }
    let blob = create_csv_blob(&csv_content(data))?;
    download_blob(&blob, filename)
}

/// Build the CSV text. Kept separate from the blob/DOM glue so the
/// formatting is testable.
pub fn csv_content<T: CsvExportable>(data: &[T]) -> String {
    let mut out = String::new();

    // UTF-8 BOM so spreadsheet apps pick the right encoding.
    out.push('\u{FEFF}');

    out.push_str(&T::headers().join(","));
    out.push('\n');

    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let result = download_url(&url, filename);

    // Release the object URL whether or not the click worked.
    let _ = Url::revoke_object_url(&url);

    result
}

/// Point a hidden anchor at `url` and click it. Used both for local blobs
/// and for short-lived artifact links handed out by the backend.
pub fn download_url(url: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        account: String,
        amount: f64,
    }

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Account", "Amount"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.account.clone(), format!("{:.2}", self.amount)]
        }
    }

    #[test]
    fn test_csv_content() {
        let rows = vec![
            Row {
                account: "ACC-001".into(),
                amount: 12.5,
            },
            Row {
                account: "Smith, John".into(),
                amount: 3.0,
            },
        ];
        let csv = csv_content(&rows);
        assert!(csv.starts_with('\u{FEFF}'));
        assert!(csv.contains("Account,Amount\n"));
        assert!(csv.contains("ACC-001,12.50\n"));
        // Comma inside a cell forces quoting.
        assert!(csv.contains("\"Smith, John\",3.00\n"));
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }
}
