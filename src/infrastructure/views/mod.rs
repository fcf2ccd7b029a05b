mod html;

// Re-export the factory function for easy access
pub use html::create_html_renderer;
