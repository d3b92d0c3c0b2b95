//! Operation type codes and their display names.

/// Display name for a numeric operation type code.
///
/// Unknown codes render as an empty name. The name is advisory output;
/// nothing dispatches on it, so a lenient lookup matches the store contract.
pub fn operation_type_name(code: i32) -> &'static str {
    match code {
        0 => "create_account",
        1 => "payment",
        2 => "path_payment",
        3 => "manage_offer",
        4 => "create_passive_offer",
        5 => "set_options",
        6 => "change_trust",
        7 => "allow_trust",
        8 => "account_merge",
        9 => "inflation",
        10 => "manage_data",
        11 => "bump_sequence",
        _ => "",
    }
}
