/// Prepended to static image paths when no other base URL is configured
pub const DEFAULT_STATIC_URL: &str = "/static/";

/// Environment variable used to configure the log filter
pub const LOG_ENV: &str = "RESPONSIVE_PICTURE_LOG";

/// Class lazy loading scripts look for on the `img` element
pub const LAZY_CLASS: &str = "lazyload";

/// A transparent 1x1 gif used as `src` until the real image is swapped in
pub const LAZY_PLACEHOLDER: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// The only directive name this library renders
pub const TAG_NAME: &str = "picture";

/// Usage shown when a directive can't be parsed
pub const TAG_USAGE: &str = r#"{% picture path "W,WxH,..." [breakpoints="768,1024"] [classes="className"] [lazy=bool] %}
or
{% picture object "W,WxH,..." "thumb,detail" [breakpoints="768,1024"] [classes="className"] [lazy=bool] %}"#;
