// Columns this program reads and writes. The table itself is created by the
// bot; other columns (such as `perms`) are left to their defaults.

diesel::table! {
    users (id) {
        id -> BigInt,
        username -> Text,
    }
}
