//! Window section validation.

use crate::schema::AutosizeConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &AutosizeConfig) {
    let window = &config.window;
    validate_range(errors, "window.width", window.width, 100, 8192);
    validate_range(errors, "window.height", window.height, 1, 8192);
    validate_range(errors, "window.max_height", window.max_height, 1, 8192);
    if window.min_height > window.max_height {
        errors.push(format!(
            "window.min_height = {} exceeds window.max_height = {}",
            window.min_height, window.max_height
        ));
    }
}
