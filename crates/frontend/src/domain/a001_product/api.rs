use crate::shared::api_utils::api_url;
use contracts::api::parse_products;
use contracts::domain::a001_product::Product;
use contracts::domain::common::AggregateRoot;
use wasm_bindgen::JsCast;

/// Получить каталог товаров целиком.
///
/// Сетевые ошибки и битый JSON сводятся к одной строке "загрузка не удалась":
/// дальше ошибки не пробрасываются, стор оставляет коллекцию пустой.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = api_url(&format!("/api/{}", Product::collection_name()));
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let parsed = parse_products(&text).map_err(|e| format!("{e}"))?;
    Ok(parsed.products)
}
