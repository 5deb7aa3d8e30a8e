pub const PAGE: &str = "min-h-screen bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900";
pub const CONTAINER: &str = "container mx-auto px-4";

pub const CARD: &str = "relative overflow-hidden rounded-xl border-2 bg-black/30 transition-all duration-300";
pub const CARD_VOTED: &str = "border-green-500 shadow-green-500/20 shadow-xl";
pub const CARD_LEADING: &str = "border-yellow-500 shadow-yellow-500/20 shadow-xl";
pub const CARD_IDLE: &str = "border-white/20 hover:border-white/40";
pub const PANEL: &str = "rounded-xl border border-white/20 bg-black/40 backdrop-blur-sm p-6";

pub const BADGE: &str = "inline-flex items-center rounded-md px-2.5 py-0.5 text-xs font-semibold";
pub const BADGE_ROUND: &str = "bg-purple-600 text-white";
pub const BADGE_LEADING: &str = "bg-yellow-500 text-black";
pub const BADGE_OUTLINE: &str = "border border-white/30 text-gray-200";

pub const BUTTON_BASE: &str = "w-full mb-4 py-2 px-4 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_VOTE: &str = "bg-purple-600 hover:bg-purple-700";
pub const BUTTON_VOTED: &str = "bg-green-600 hover:bg-green-700";

pub const PROGRESS_TRACK: &str = "h-2 w-full overflow-hidden rounded-full bg-white/10";
pub const PROGRESS_BAR: &str = "h-full bg-purple-500 transition-all duration-500";
pub const SPINNER: &str = "w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin";

pub const TEXT_MUTED: &str = "text-gray-300";
pub const TEXT_FAINT: &str = "text-gray-400 text-sm";
pub const HEADING_LG: &str = "text-3xl font-bold text-white mb-2";
pub const HEADING_SM: &str = "text-lg font-semibold text-white";
pub const FLEX_BETWEEN: &str = "flex justify-between items-center";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn card_style(user_choice: bool, leading: bool) -> String {
    if user_choice {
        combine_classes(CARD, CARD_VOTED)
    } else if leading {
        combine_classes(CARD, CARD_LEADING)
    } else {
        combine_classes(CARD, CARD_IDLE)
    }
}

pub fn vote_button(user_choice: bool) -> String {
    combine_classes(BUTTON_BASE, if user_choice { BUTTON_VOTED } else { BUTTON_VOTE })
}
