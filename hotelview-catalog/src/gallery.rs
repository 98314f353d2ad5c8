use serde::{Deserialize, Serialize};

/// Carousel over a property's images
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageGallery {
    images: Vec<String>,
    current: usize,
}

impl ImageGallery {
    pub fn new(images: &[String]) -> Self {
        Self {
            images: images.to_vec(),
            current: 0,
        }
    }

    /// No images: render the placeholder tile instead
    pub fn is_placeholder(&self) -> bool {
        self.images.is_empty()
    }

    /// Arrows and dot indicators only make sense with more than one image
    pub fn shows_navigation(&self) -> bool {
        self.images.len() > 1
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + self.images.len() - 1) % self.images.len();
        }
    }

    /// Jump to an indicator; out-of-range indexes are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Alt text for the image at the current position
    pub fn alt_text(&self, hotel_name: &str) -> String {
        format!("{} - Image {}", hotel_name, self.current + 1)
    }
}
