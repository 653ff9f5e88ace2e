pub mod cli_consts {
    //! Dashboard Constants
    //!
    //! Defaults and fixed presentation values, grouped by the part of the dashboard that
    //! uses them.

    // =============================================================================
    // SERVER & SESSION
    // =============================================================================

    /// Address the HTTP front end binds to when neither config nor flags say otherwise.
    pub const DEFAULT_HOST: &str = "127.0.0.1";

    pub const DEFAULT_PORT: u16 = 8050;

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // DATA & ASSETS
    // =============================================================================

    pub const DEFAULT_DATA_DIR: &str = "./data/cleaned_data";

    /// Root holding the `images/` and `wordclouds/` folders.
    pub const DEFAULT_ASSETS_DIR: &str = ".";

    /// Country selected before the first click, so the first render is complete.
    pub const DEFAULT_ISO: &str = "ALB";

    pub const PHOTO_DIR: &str = "images";
    pub const WORDCLOUD_DIR: &str = "wordclouds";

    /// Optional placeholder shipped next to the country photos.
    pub const PLACEHOLDER_FILE: &str = "placeholder.jpg";

    // =============================================================================
    // PRESENTATION
    // =============================================================================

    pub const PAGE_TITLE: &str = "KivaExplore";
    pub const PAGE_SUBTITLE: &str = "Browse By Gender and Poverty";

    /// `{code}` is replaced by the selected country's two-letter prefix.
    pub const DEFAULT_LINK_TEMPLATE: &str = "https://www.kiva.org/lend?country={code}";

    /// Fill for the selected country in the scatter and list view.
    pub const HIGHLIGHT_COLOR: &str = "#3D9970";
    pub const HIGHLIGHT_TEXT_COLOR: &str = "white";

    /// Fill for unselected scatter points.
    pub const BASE_POINT_COLOR: &str = "#999999";

    pub const SECTOR_BAR_COLOR: &str = "grey";

    pub const CHOROPLETH_HEIGHT: u32 = 800;
    pub const CHOROPLETH_WIDTH: u32 = 1300;
}
