//! Conversion of settings and files into their wire JSON.

use disclaimer_domain::{FileInfo, FilesPayload, Settings};
use serde_json::{Map, Value, json};
use std::path::Path;

/// Settings payload, keyed by `app_id`:
///
/// ```text
/// { pdfIcon, <app>UserLang, <app>FilePreffix,
///   adminSettings: { <app>DefaultLang: {value}, <app>MaxTxtFileSize: {value},
///                    <app>TxtFile: {value, basePath, file?},
///                    <app>PdfFile: {value, basePath, file?} } }
/// ```
pub fn settings_payload(settings: &Settings, app_id: &str) -> Value {
    let mut admin = Map::new();
    admin.insert(
        format!("{app_id}DefaultLang"),
        json!({ "value": settings.default_lang }),
    );
    admin.insert(
        format!("{app_id}MaxTxtFileSize"),
        json!({ "value": settings.max_text_size.megabytes() }),
    );
    admin.insert(
        format!("{app_id}TxtFile"),
        document_setting(
            settings.text_enabled,
            &settings.text_base_path,
            settings.text_file.as_ref(),
        ),
    );
    admin.insert(
        format!("{app_id}PdfFile"),
        document_setting(
            settings.pdf_enabled,
            &settings.pdf_base_path,
            settings.pdf_file.as_ref(),
        ),
    );

    let mut data = Map::new();
    data.insert("pdfIcon".to_string(), json!(settings.pdf_icon_url));
    data.insert(format!("{app_id}UserLang"), json!(settings.user_lang));
    data.insert(format!("{app_id}FilePreffix"), json!(settings.file_prefix));
    data.insert("adminSettings".to_string(), Value::Object(admin));
    Value::Object(data)
}

/// Files payload: `{ txtFile, pdfFile }`.
pub fn files_payload(files: &FilesPayload) -> Value {
    json!({
        "txtFile": file_value(&files.text),
        "pdfFile": file_value(&files.pdf),
    })
}

fn document_setting(enabled: bool, base_path: &Path, file: Option<&FileInfo>) -> Value {
    let mut entry = Map::new();
    entry.insert("value".to_string(), json!(enabled.to_string()));
    entry.insert(
        "basePath".to_string(),
        json!(base_path.display().to_string()),
    );
    if let Some(file) = file {
        entry.insert("file".to_string(), file_value(file));
    }
    Value::Object(entry)
}

fn file_value(file: &FileInfo) -> Value {
    serde_json::to_value(file).unwrap_or(Value::Null)
}
