#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Quit,
    Home,
    RandomAccent,

    // Search box
    FocusSearch,
    InputChar(char),
    InputPaste(String),
    InputBackspace,
    SubmitSearch,

    // Navigation
    MoveUp,
    MoveDown,
    EscapeAll,

    // Results
    ViewSelected,
    ToggleSelectedFavourite,

    // Drawer
    ToggleDrawer,
    CloseDrawer,
    OpenSelectedFavourite,
    RemoveSelectedFavourite,
    RequestClearFavourites,

    // Modal
    ToggleModalFavourite,
    CloseModal,

    // Popups
    Confirm(bool),
    DismissNotification,
}
