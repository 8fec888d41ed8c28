//! 颜色常量
//!
//! DOT 的 `fillcolor` 取值，均为 Graphviz 可识别的 X11 颜色名

/// 顶点默认颜色
pub const WHITE: &str = "white";
pub const BLACK: &str = "black";
pub const GREY: &str = "grey";
pub const RED: &str = "red";
pub const GREEN: &str = "green";
pub const BLUE: &str = "blue";
pub const YELLOW: &str = "yellow";
pub const ORANGE: &str = "orange";
pub const CYAN: &str = "cyan";
pub const MAGENTA: &str = "magenta";
pub const LIGHT_BLUE: &str = "lightblue";
pub const LIGHT_GREY: &str = "lightgrey";
