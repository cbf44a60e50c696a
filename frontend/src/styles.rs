pub const CONTAINER: &str = "bg-gray-900 container mx-auto px-6 py-10 max-w-4xl rounded-xl shadow-lg mt-16";
pub const CONTAINER_SM: &str = "container mx-auto px-6 py-10 max-w-2xl rounded-xl shadow-lg mt-16";

pub const INPUT_BASE: &str = "appearance-none border border-gray-600 bg-gray-800 text-white text-lg rounded-md w-full py-2 px-4 focus:outline-none focus:border-blue-500";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-blue-600 hover:bg-blue-700 focus:ring-2 focus:ring-blue-400 focus:outline-none";

pub const TEXT_LABEL: &str = "block text-sm font-semibold text-gray-200";
pub const TEXT_ERROR: &str = "text-sm text-red-500 font-semibold";
pub const TEXT_MUTED: &str = "text-sm text-gray-400";
pub const HEADING_LG: &str = "text-3xl font-extrabold mb-4 text-center text-gray-100";
pub const HEADING_MD: &str = "text-2xl font-bold mb-5 text-gray-100";
pub const HEADING_SM: &str = "text-xl font-semibold mb-3 text-gray-100";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}
