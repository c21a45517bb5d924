/// Scale according to which the server calculates an air quality index.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum AqiStandard {
    Usa,
    China,
    India,
}

impl AqiStandard {
    pub fn code(&self) -> &'static str {
        match self {
            AqiStandard::Usa => "us",
            AqiStandard::China => "cn",
            AqiStandard::India => "in",
        }
    }
}
