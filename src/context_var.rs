//! tmux format variables.
//!
//! Each variable is emitted as its `#{name}` token and expanded by tmux at
//! draw time, so the value always belongs to the window or pane being drawn.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! context_vars {
    ($($variant:ident => $name:literal,)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum ContextVar {
            $($variant,)*
        }

        impl ContextVar {
            pub const ALL: &'static [ContextVar] = &[$(ContextVar::$variant,)*];

            /// Variable name as tmux spells it.
            pub fn name(self) -> &'static str {
                match self {
                    $(ContextVar::$variant => $name,)*
                }
            }
        }
    };
}

context_vars! {
    ActiveWindowIndex => "active_window_index",
    AlternateOn => "alternate_on",
    AlternateSavedX => "alternate_saved_x",
    AlternateSavedY => "alternate_saved_y",
    BufferCreated => "buffer_created",
    BufferName => "buffer_name",
    BufferSample => "buffer_sample",
    BufferSize => "buffer_size",
    ClientActivity => "client_activity",
    ClientCellHeight => "client_cell_height",
    ClientCellWidth => "client_cell_width",
    ClientControlMode => "client_control_mode",
    ClientCreated => "client_created",
    ClientDiscarded => "client_discarded",
    ClientFlags => "client_flags",
    ClientHeight => "client_height",
    ClientKeyTable => "client_key_table",
    ClientLastSession => "client_last_session",
    ClientName => "client_name",
    ClientPid => "client_pid",
    ClientPrefix => "client_prefix",
    ClientReadonly => "client_readonly",
    ClientSession => "client_session",
    ClientTermfeatures => "client_termfeatures",
    ClientTermname => "client_termname",
    ClientTermtype => "client_termtype",
    ClientTty => "client_tty",
    ClientUid => "client_uid",
    ClientUser => "client_user",
    ClientUtf8 => "client_utf8",
    ClientWidth => "client_width",
    ClientWritten => "client_written",
    Command => "command",
    CommandListAlias => "command_list_alias",
    CommandListName => "command_list_name",
    CommandListUsage => "command_list_usage",
    ConfigFiles => "config_files",
    CopyCursorLine => "copy_cursor_line",
    CopyCursorWord => "copy_cursor_word",
    CopyCursorX => "copy_cursor_x",
    CopyCursorY => "copy_cursor_y",
    CurrentFile => "current_file",
    CursorCharacter => "cursor_character",
    CursorFlag => "cursor_flag",
    CursorX => "cursor_x",
    CursorY => "cursor_y",
    HistoryBytes => "history_bytes",
    HistoryLimit => "history_limit",
    HistorySize => "history_size",
    Hook => "hook",
    HookClient => "hook_client",
    HookPane => "hook_pane",
    HookSession => "hook_session",
    HookSessionName => "hook_session_name",
    HookWindow => "hook_window",
    HookWindowName => "hook_window_name",
    Host => "host",
    HostShort => "host_short",
    InsertFlag => "insert_flag",
    KeypadCursorFlag => "keypad_cursor_flag",
    KeypadFlag => "keypad_flag",
    LastWindowIndex => "last_window_index",
    Line => "line",
    MouseAllFlag => "mouse_all_flag",
    MouseAnyFlag => "mouse_any_flag",
    MouseButtonFlag => "mouse_button_flag",
    MouseHyperlink => "mouse_hyperlink",
    MouseLine => "mouse_line",
    MouseSgrFlag => "mouse_sgr_flag",
    MouseStandardFlag => "mouse_standard_flag",
    MouseUtf8Flag => "mouse_utf8_flag",
    MouseWord => "mouse_word",
    MouseX => "mouse_x",
    MouseY => "mouse_y",
    NextSessionId => "next_session_id",
    OriginFlag => "origin_flag",
    PaneActive => "pane_active",
    PaneAtBottom => "pane_at_bottom",
    PaneAtLeft => "pane_at_left",
    PaneAtRight => "pane_at_right",
    PaneAtTop => "pane_at_top",
    PaneBg => "pane_bg",
    PaneBottom => "pane_bottom",
    PaneCurrentCommand => "pane_current_command",
    PaneCurrentPath => "pane_current_path",
    PaneDead => "pane_dead",
    PaneDeadSignal => "pane_dead_signal",
    PaneDeadStatus => "pane_dead_status",
    PaneDeadTime => "pane_dead_time",
    PaneFg => "pane_fg",
    PaneFormat => "pane_format",
    PaneHeight => "pane_height",
    PaneId => "pane_id",
    PaneInMode => "pane_in_mode",
    PaneIndex => "pane_index",
    PaneInputOff => "pane_input_off",
    PaneLast => "pane_last",
    PaneLeft => "pane_left",
    PaneMarked => "pane_marked",
    PaneMarkedSet => "pane_marked_set",
    PaneMode => "pane_mode",
    PanePath => "pane_path",
    PanePid => "pane_pid",
    PanePipe => "pane_pipe",
    PaneRight => "pane_right",
    PaneSearchString => "pane_search_string",
    PaneStartCommand => "pane_start_command",
    PaneStartPath => "pane_start_path",
    PaneSynchronized => "pane_synchronized",
    PaneTabs => "pane_tabs",
    PaneTitle => "pane_title",
    PaneTop => "pane_top",
    PaneTty => "pane_tty",
    PaneWidth => "pane_width",
    Pid => "pid",
    RectangleToggle => "rectangle_toggle",
    ScrollPosition => "scroll_position",
    ScrollRegionLower => "scroll_region_lower",
    ScrollRegionUpper => "scroll_region_upper",
    SearchMatch => "search_match",
    SearchPresent => "search_present",
    SelectionActive => "selection_active",
    SelectionEndX => "selection_end_x",
    SelectionEndY => "selection_end_y",
    SelectionPresent => "selection_present",
    SelectionStartX => "selection_start_x",
    SelectionStartY => "selection_start_y",
    SessionActivity => "session_activity",
    SessionAlerts => "session_alerts",
    SessionAttached => "session_attached",
    SessionAttachedList => "session_attached_list",
    SessionCreated => "session_created",
    SessionFormat => "session_format",
    SessionGroup => "session_group",
    SessionGroupAttached => "session_group_attached",
    SessionGroupAttachedList => "session_group_attached_list",
    SessionGroupList => "session_group_list",
    SessionGroupManyAttached => "session_group_many_attached",
    SessionGroupSize => "session_group_size",
    SessionGrouped => "session_grouped",
    SessionId => "session_id",
    SessionLastAttached => "session_last_attached",
    SessionManyAttached => "session_many_attached",
    SessionMarked => "session_marked",
    SessionName => "session_name",
    SessionPath => "session_path",
    SessionStack => "session_stack",
    SessionWindows => "session_windows",
    SocketPath => "socket_path",
    StartTime => "start_time",
    Uid => "uid",
    User => "user",
    Version => "version",
    WindowActive => "window_active",
    WindowActiveClients => "window_active_clients",
    WindowActiveClientsList => "window_active_clients_list",
    WindowActiveSessions => "window_active_sessions",
    WindowActiveSessionsList => "window_active_sessions_list",
    WindowActivity => "window_activity",
    WindowActivityFlag => "window_activity_flag",
    WindowBellFlag => "window_bell_flag",
    WindowBigger => "window_bigger",
    WindowCellHeight => "window_cell_height",
    WindowCellWidth => "window_cell_width",
    WindowEndFlag => "window_end_flag",
    WindowFlags => "window_flags",
    WindowFormat => "window_format",
    WindowHeight => "window_height",
    WindowId => "window_id",
    WindowIndex => "window_index",
    WindowLastFlag => "window_last_flag",
    WindowLayout => "window_layout",
    WindowLinked => "window_linked",
    WindowLinkedSessions => "window_linked_sessions",
    WindowLinkedSessionsList => "window_linked_sessions_list",
    WindowMarkedFlag => "window_marked_flag",
    WindowName => "window_name",
    WindowOffsetX => "window_offset_x",
    WindowOffsetY => "window_offset_y",
    WindowPanes => "window_panes",
    WindowRawFlags => "window_raw_flags",
    WindowSilenceFlag => "window_silence_flag",
    WindowStackIndex => "window_stack_index",
    WindowStartFlag => "window_start_flag",
    WindowVisibleLayout => "window_visible_layout",
    WindowWidth => "window_width",
    WindowZoomedFlag => "window_zoomed_flag",
    WrapFlag => "wrap_flag",
}

impl fmt::Display for ContextVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{{{}}}", self.name())
    }
}
