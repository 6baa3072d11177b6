use std::collections::HashSet;

/// Turns a raw header record into unique column names.
///
/// A leading byte-order mark is stripped, blank headers become
/// `Unnamed: <index>`, and repeats become `name.1`, `name.2`, ...
pub fn unique_headers<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut headers = Vec::new();

    for (idx, cell) in raw.into_iter().enumerate() {
        let cell = if idx == 0 {
            cell.trim_start_matches('\u{feff}')
        } else {
            cell
        };
        let base = if cell.trim().is_empty() {
            format!("Unnamed: {idx}")
        } else {
            cell.to_string()
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(name.clone());
        headers.push(name);
    }

    headers
}
