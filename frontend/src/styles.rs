pub const PAGE: &str = "max-w-md mx-auto px-4 pt-4 pb-28 space-y-4";
pub const HEADER: &str = "fixed top-0 z-50 w-full bg-white/60 dark:bg-gray-800/60 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const HEADER_INNER: &str = "max-w-md mx-auto h-14 px-4 flex items-center justify-between";
pub const BRAND: &str = "text-lg font-bold text-gray-900 dark:text-white";
pub const BALANCE_PILL: &str = "flex items-center space-x-1 px-3 py-1 bg-gray-100 dark:bg-gray-700 rounded-lg text-sm font-medium text-blue-700 dark:text-blue-300";

pub const BOTTOM_NAV: &str = "fixed bottom-0 z-50 w-full bg-white/80 dark:bg-gray-900/80 backdrop-blur-md border-t border-gray-200/50 dark:border-gray-700/50";
pub const BOTTOM_NAV_INNER: &str = "max-w-md mx-auto h-16 grid grid-cols-5";
pub const NAV_ITEM: &str = "flex flex-col items-center justify-center text-xs font-medium text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200";
pub const NAV_ITEM_ACTIVE: &str = "flex flex-col items-center justify-center text-xs font-semibold text-blue-600 dark:text-blue-400";

pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-4";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const CARD_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-white";
pub const CARD_TEXT: &str = "text-sm text-gray-600 dark:text-gray-400";
pub const STAT_GRID: &str = "grid grid-cols-2 gap-3";
pub const STAT_VALUE: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const STAT_LABEL: &str = "text-xs uppercase tracking-wide text-gray-500 dark:text-gray-400";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-700 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SMALL: &str = "inline-flex items-center justify-center px-3 py-1 rounded-md text-xs font-medium border border-gray-300 dark:border-gray-600 text-gray-800 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700 disabled:opacity-50";
pub const TAB: &str = "px-3 py-1.5 rounded-lg text-sm font-medium text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700";
pub const TAB_ACTIVE: &str = "px-3 py-1.5 rounded-lg text-sm font-semibold bg-blue-600 text-white";

pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const INPUT_ERROR: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-2 ring-inset ring-red-500 focus:ring-2 focus:ring-inset focus:ring-red-500 sm:text-sm";
pub const SELECT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white ring-1 ring-inset ring-gray-300 dark:ring-gray-700";
pub const FORM: &str = "mt-4 space-y-4";

pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const TEXT_SUCCESS: &str = "text-sm text-green-500 dark:text-green-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400 mt-1";
pub const LINK: &str = "text-blue-600 dark:text-blue-400 hover:text-blue-700 dark:hover:text-blue-300 transition-colors duration-200";

pub const TABLE: &str = "w-full text-sm text-left text-gray-700 dark:text-gray-300";
pub const TABLE_HEAD: &str = "text-xs uppercase text-gray-500 dark:text-gray-400 border-b border-gray-200 dark:border-gray-700";
pub const TABLE_ROW: &str = "border-b border-gray-100 dark:border-gray-700/50";
pub const BADGE: &str = "inline-block px-2 py-0.5 rounded-full text-xs font-medium";

pub const PROGRESS_TRACK: &str = "w-full h-2 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden";
pub const PROGRESS_BAR: &str = "h-full rounded-full bg-gradient-to-r from-blue-500 to-purple-500 transition-all duration-500";

pub const LOADING_SPINNER: &str = "animate-spin h-5 w-5 text-blue-600 dark:text-blue-400";
pub const TOAST_SUCCESS: &str = "fixed top-16 left-1/2 -translate-x-1/2 z-50 w-[90%] max-w-md bg-green-50 border border-green-200 text-green-800 px-4 py-3 rounded-lg shadow-lg animate-fade-in flex items-center";
pub const TOAST_ERROR: &str = "fixed top-16 left-1/2 -translate-x-1/2 z-50 w-[90%] max-w-md bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded-lg shadow-lg animate-fade-in flex items-center";
pub const FOOTER: &str = "flex justify-center space-x-4 py-4";
pub const FOOTER_LINK: &str = "text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200";

pub fn status_badge(status: &str) -> String {
    let colour = match status {
        "active" | "approved" | "paid" => "bg-green-100 text-green-700 dark:bg-green-900/30 dark:text-green-400",
        "paused" | "pending" | "under_review" => "bg-yellow-100 text-yellow-700 dark:bg-yellow-900/30 dark:text-yellow-400",
        "rejected" | "banned" => "bg-red-100 text-red-700 dark:bg-red-900/30 dark:text-red-400",
        _ => "bg-gray-100 text-gray-700 dark:bg-gray-700 dark:text-gray-300",
    };
    format!("{} {}", BADGE, colour)
}
