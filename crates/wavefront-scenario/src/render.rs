//! Plain-text renderings of terrains, distance fields and paths.
//!
//! Nothing here prints; callers decide where the text goes.

use wavefront_core::{Point, Terrain};
use wavefront_paths::DistanceField;

/// Glyph drawn on the intermediate cells of a path.
pub const PATH_GLYPH: char = '*';

/// The terrain as a matrix of tile codes (0 empty, 1 obstacle, 4 start,
/// 5 goal), one row per line.
pub fn terrain_matrix(terrain: &Terrain) -> String {
    matrix((0..terrain.height()).map(|r| terrain.row(r).iter().map(|t| t.code()).collect()))
}

/// The distance field as a right-aligned matrix, `-1` for unreached cells.
pub fn field_matrix(field: &DistanceField) -> String {
    matrix(field.rows().map(<[i32]>::to_vec))
}

fn matrix(rows: impl Iterator<Item = Vec<i32>>) -> String {
    let rows: Vec<Vec<i32>> = rows.collect();
    let width = rows
        .iter()
        .flatten()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let line: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
        out.push_str(&line.join(" "));
    }
    out
}

/// The terrain layout with [`PATH_GLYPH`] on every path cell between the
/// start and the goal.
pub fn terrain_with_path(terrain: &Terrain, path: &[Point]) -> String {
    let mut out = String::new();
    for r in 0..terrain.height() {
        if r > 0 {
            out.push('\n');
        }
        for (c, tile) in terrain.row(r).iter().enumerate() {
            let p = Point::new(r, c as i32);
            let on_path = p != terrain.start() && p != terrain.goal() && path.contains(&p);
            out.push(if on_path { PATH_GLYPH } else { tile.symbol() });
        }
    }
    out
}

/// A path as a bracketed list of `(row, col)` pairs.
pub fn path_list(path: &[Point]) -> String {
    let mut out = String::from("[");
    for (i, p) in path.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&p.to_string());
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavefront_paths::plan;

    fn solved() -> (Terrain, wavefront_paths::Plan) {
        let t = Terrain::from_ascii("S..\n.#.\n..G").unwrap();
        let p = plan(&t, t.start(), t.goal(), None).unwrap();
        (t, p)
    }

    #[test]
    fn terrain_codes() {
        let (t, _) = solved();
        assert_eq!(terrain_matrix(&t), "4 0 0\n0 1 0\n0 0 5");
    }

    #[test]
    fn field_is_right_aligned() {
        let (_, p) = solved();
        assert_eq!(field_matrix(&p.field), " 0  1  2\n 1 -1  2\n 2  2  3");
    }

    #[test]
    fn path_overlay() {
        let (t, p) = solved();
        let path = p.path().unwrap();
        assert_eq!(terrain_with_path(&t, path), "S*.\n.#*\n..G");
        assert_eq!(path_list(path), "[(0, 0), (0, 1), (1, 2), (2, 2)]");
    }

    #[test]
    fn empty_path_list() {
        assert_eq!(path_list(&[]), "[]");
    }
}
