/// Fullscreen-triangle shader that samples the uploaded frame texture.
pub const BLIT_SOURCE: &str = include_str!("blit.wgsl");

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates WGSL code using naga.
    fn validate_wgsl(code: &str) -> Result<naga::Module, String> {
        let module = naga::front::wgsl::parse_str(code)
            .map_err(|e| format!("WGSL parse error: {:?}", e))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| format!("WGSL validation error: {:?}", e))?;

        Ok(module)
    }

    #[test]
    fn test_blit_shader_is_valid() {
        validate_wgsl(BLIT_SOURCE).expect("blit WGSL should be valid");
    }

    #[test]
    fn test_blit_entry_points() {
        let module = validate_wgsl(BLIT_SOURCE).unwrap();
        let names: Vec<&str> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
        assert!(names.contains(&"vs_main"));
        assert!(names.contains(&"fs_main"));
    }
}
