use web_sys::window;

const ERROR_MESSAGE: &str =
    "Failed to redirect. Please try to refresh the page.";

pub fn redirect_to(url: &str) -> Result<(), String> {
    let window = window().ok_or_else(|| "No window available".to_string())?;
    window
        .location()
        .replace(url)
        .map_err(|_| ERROR_MESSAGE.to_string())
}
