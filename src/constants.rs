// DOM contract with the host page.

pub const CANVAS_ID: &str = "viewer-canvas";
pub const STAGES_URL: &str = "stages.json";

// Open menus that must keep receiving their own pointer events
pub const OPEN_MENU_SELECTOR: &str = ".menu.open, #annotation-panel.open";

// Notifications dispatched on `document` for the menu layer
pub const EVT_OPEN_ANNOTATION: &str = "stage:open-annotation";
pub const EVT_ANNOTATIONS_CHANGED: &str = "stage:annotations-changed";
pub const EVT_SELECTION_CLEARED: &str = "stage:selection-cleared";
pub const EVT_MARKER_MOVED: &str = "stage:marker-moved";
pub const EVT_STAGE_LOADED: &str = "stage:loaded";
