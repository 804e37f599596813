use derive_more::Display;

/// Everything that can end a catalog load or a conversion.
///
/// The `Display` text is the sentence shown to the user; see
/// [`ConversionError::user_message`] for the exact result-area string.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ConversionError {
    #[display(fmt = "Por favor, ingrese una cantidad válida en CLP.")]
    InvalidAmount,
    #[display(fmt = "Por favor, seleccione una moneda válida.")]
    InvalidCurrency,
    #[display(fmt = "{}", _0)]
    FetchFailure(String),
    #[display(fmt = "No se encontraron datos para la moneda seleccionada")]
    EmptySeries,
    #[display(fmt = "Respuesta inválida de la API: {}", _0)]
    MalformedResponse(String),
    #[display(fmt = "El indicador '{}' no está disponible en la API", _0)]
    MissingIndicator(String),
    #[display(fmt = "No se pudo dibujar el gráfico: {}", _0)]
    Rendering(String),
}

impl ConversionError {
    /// Local input errors; raised before any request is made.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount | Self::InvalidCurrency)
    }

    /// Prefix a transport failure with what was being fetched.
    pub fn with_context(self, context: &str) -> Self {
        match self {
            Self::FetchFailure(reason) if reason.is_empty() => Self::FetchFailure(context.to_string()),
            Self::FetchFailure(reason) => Self::FetchFailure(format!("{context}: {reason}")),
            other => other,
        }
    }

    /// Text written to the result area.
    pub fn user_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            format!("Error: {self}")
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

pub type WidgetResult<T> = Result<T, ConversionError>;
