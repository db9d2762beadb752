pub struct DefaultsConfig {
    pub interpreter: String,
    pub fasta_paths: String,
    pub max_template_date: String,
    pub model_preset: String,
    pub data_dir: String,
    pub use_precomputed_msas: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            fasta_paths: "/project-abd/xinwei/msaprocess/casp15_easy/fasta".to_string(),
            max_template_date: "2021-11-01".to_string(),
            model_preset: "monomer".to_string(),
            data_dir: "/project-abd/xinwei/msaprocess/af2data".to_string(),
            use_precomputed_msas: true,
        }
    }
}
