use printcrop_core::fit::DisplayFit;

/// Overall UI state: notices, log, and session progress display.
#[derive(Default)]
pub struct UiState {
    /// One-line notice shown prominently (errors, completion).
    pub notice: Option<String>,
    /// Scrolling log of per-image events.
    pub log_messages: Vec<String>,
    /// Number of crops written this session.
    pub saved_count: usize,
    /// True while the worker is decoding the next image.
    pub loading: bool,
    /// Set once every image in the session has been handled.
    pub all_done: bool,
}

impl UiState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Display state for the image currently on screen.
#[derive(Default)]
pub struct ViewState {
    pub texture: Option<egui::TextureHandle>,
    /// Fit computed against the viewport size captured at load time.
    pub fit: Option<DisplayFit>,
    /// Source pixel dimensions of the displayed image.
    pub source_size: Option<[u32; 2]>,
}

impl ViewState {
    pub fn clear(&mut self) {
        self.texture = None;
        self.fit = None;
        self.source_size = None;
    }
}
