// ============================================================================
// I18N - Translation tables (zh-TW default, English)
// ============================================================================

use std::collections::HashMap;

/// Translation table for a language
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Login
            translations.insert("please_sign_in", "Please sign in");
            translations.insert("username", "Username");
            translations.insert("password", "Password");
            translations.insert("sign_in", "Sign in");

            // Catalog
            translations.insert("check_login", "Check whether the user is signed in");
            translations.insert("product_list", "Products");
            translations.insert("col_title", "Name");
            translations.insert("col_origin_price", "Original price");
            translations.insert("col_price", "Price");
            translations.insert("col_enabled", "Enabled");
            translations.insert("col_details", "Details");
            translations.insert("view_details", "View details");
            translations.insert("yes", "Yes");
            translations.insert("no", "No");

            // Detail panel
            translations.insert("product_detail", "Product details");
            translations.insert("description", "Description");
            translations.insert("content", "Content");
            translations.insert("more_images", "More images:");
            translations.insert("select_product_prompt", "Select a product to view");

            // Notices
            translations.insert("sign_in_failed", "Sign-in failed");
            translations.insert("products_fetch_failed", "Could not load products");
            translations.insert("session_check_failed", "Error while checking sign-in");
            translations.insert("logged_in", "User is signed in");
            translations.insert("not_logged_in", "Not signed in");
        }
        _ => {
            // Login
            translations.insert("please_sign_in", "請先登入");
            translations.insert("username", "帳號");
            translations.insert("password", "密碼");
            translations.insert("sign_in", "登入");

            // Catalog
            translations.insert("check_login", "檢查使用者是否登入");
            translations.insert("product_list", "產品列表");
            translations.insert("col_title", "產品名稱");
            translations.insert("col_origin_price", "原價");
            translations.insert("col_price", "售價");
            translations.insert("col_enabled", "是否啟用");
            translations.insert("col_details", "查看細節");
            translations.insert("view_details", "查看細節");
            translations.insert("yes", "是");
            translations.insert("no", "否");

            // Detail panel
            translations.insert("product_detail", "單一產品細節");
            translations.insert("description", "商品描述");
            translations.insert("content", "商品內容");
            translations.insert("more_images", "更多圖片：");
            translations.insert("select_product_prompt", "請選擇一個商品查看");

            // Notices
            translations.insert("sign_in_failed", "登入失敗");
            translations.insert("products_fetch_failed", "取得產品資料失敗");
            translations.insert("session_check_failed", "確認登入發生錯誤");
            translations.insert("logged_in", "使用者已登入");
            translations.insert("not_logged_in", "未登入");
        }
    }

    translations
}

/// Translate `key` into `lang` ("ZH" or "EN"); unknown keys come back unchanged
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}
