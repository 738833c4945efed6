use crate::page::{ImageElement, DEFAULT_IMAGE};

pub fn change_image_source(image: &mut ImageElement, src: &str) {
    image.src = src.to_string();
}

pub fn reset_image_source(image: &mut ImageElement) {
    image.src = DEFAULT_IMAGE.to_string();
}
