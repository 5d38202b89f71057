//! 文件选择与读取

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Uint8Array;
use web_sys::{File, HtmlInputElement};

/// 从 `<input type="file">` 读出的文件
pub struct PickedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// 读取文件输入框中选中的第一个文件；没有选择时返回 `Ok(None)`
pub async fn read_picked(input: &HtmlInputElement) -> Result<Option<PickedFile>, String> {
    let Some(file) = input.files().and_then(|list| list.get(0)) else {
        return Ok(None);
    };
    read_file(&file).await.map(Some)
}

async fn read_file(file: &File) -> Result<PickedFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("读取文件失败: {:?}", e))?;

    let bytes = buffer
        .dyn_into::<web_sys::js_sys::ArrayBuffer>()
        .map(|b| Uint8Array::new(&b).to_vec())
        .map_err(|e| format!("ArrayBuffer 类型转换失败: {:?}", e))?;

    Ok(PickedFile {
        name: file.name(),
        content_type: file.type_(),
        bytes,
    })
}
