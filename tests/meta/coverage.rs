//! Keeps the unit test tree in step with the source tree

#[cfg(test)]
mod tests {
    use mosaicist::StyleRegistry;
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module declarations carry no behavior of their own
    fn is_structural(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn relative_paths(dir: &Path, base: &Path, out: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|error| io::Error::other(error.to_string()))?
                .to_string_lossy()
                .into_owned();

            if path.is_dir() {
                out.insert(relative);
                relative_paths(&path, base, out)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                out.insert(relative);
            }
        }
        Ok(())
    }

    fn tree(root: &str) -> io::Result<BTreeSet<String>> {
        let base = Path::new(root);
        let mut paths = BTreeSet::new();
        if base.is_dir() {
            relative_paths(base, base, &mut paths)?;
        }
        Ok(paths)
    }

    fn unit_sources() -> io::Result<Vec<(String, String)>> {
        let mut sources = Vec::new();
        for relative in tree(UNIT_DIR)? {
            let path = Path::new(UNIT_DIR).join(&relative);
            if path.is_file() && !is_structural(&relative) {
                sources.push((relative, fs::read_to_string(path)?));
            }
        }
        Ok(sources)
    }

    // Tests each source module has a unit test file at the mirrored path
    // Verified by adding a source file without tests
    #[test]
    fn test_all_src_files_have_unit_tests() -> io::Result<()> {
        let tests = tree(UNIT_DIR)?;
        let missing: Vec<String> = tree(SRC_DIR)?
            .into_iter()
            .filter(|path| !is_structural(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
        Ok(())
    }

    // Tests no unit test file outlives its source module
    // Verified by deleting a source file
    #[test]
    fn test_all_unit_tests_have_src_counterparts() -> io::Result<()> {
        let sources = tree(SRC_DIR)?;
        let orphaned: Vec<String> = tree(UNIT_DIR)?
            .into_iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(path))
            .map(|path| format!("  - tests/unit/{path}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without a source module:\n{}",
            orphaned.join("\n")
        );
        Ok(())
    }

    // Tests every unit file has a header and at least one test
    // Verified by removing the header from one file
    #[test]
    fn test_unit_files_are_documented_tests() -> io::Result<()> {
        let offenders: Vec<String> = unit_sources()?
            .into_iter()
            .filter(|(_, content)| !content.starts_with("//! Tests for") || !content.contains("#[test]"))
            .map(|(path, _)| format!("  - tests/unit/{path}"))
            .collect();

        assert!(
            offenders.is_empty(),
            "Unit files missing a `//! Tests for` header or a #[test]:\n{}",
            offenders.join("\n")
        );
        Ok(())
    }

    // Tests every built-in style is named in at least one algorithm unit test
    // Verified by registering a style nobody tests
    #[test]
    fn test_every_style_is_exercised() -> io::Result<()> {
        let algorithm_tests: String = unit_sources()?
            .into_iter()
            .filter(|(path, _)| path.starts_with("algorithm"))
            .map(|(_, content)| content)
            .collect();

        let untested: Vec<&str> = StyleRegistry::default()
            .names()
            .into_iter()
            .filter(|name| !algorithm_tests.contains(&format!("\"{name}\"")))
            .collect();

        assert!(untested.is_empty(), "Styles without unit tests: {untested:?}");
        Ok(())
    }
}
