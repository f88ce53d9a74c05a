//! Configuration for the proveedor lookup module
//!
//! Endpoint paths, validation thresholds and every user-facing message
//! live here so the lookup logic never hardcodes them. `Default` mirrors
//! the values the backend templates ship with; callers may override any
//! field before building the flow.

use serde::{Deserialize, Serialize};

/// Default NIT length bounds (digits)
pub const NIT_MIN_LENGTH: usize = 7;
pub const NIT_MAX_LENGTH: usize = 15;

/// Endpoint paths relative to `base_url`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    /// Origin of the backend, e.g. `https://app.example.com`
    pub base_url: String,
    pub consultar_nit: String,
    pub registrar: String,
    pub actualizar: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base_url: std::env::var("PROVEEDOR_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            consultar_nit: "/proveedor/consultar-nit/".to_string(),
            registrar: "/proveedor/registrar/".to_string(),
            actualizar: "/proveedor/detalle/".to_string(),
        }
    }
}

impl Endpoints {
    /// Full URL for the NIT consultation endpoint
    pub fn consultar_nit_url(&self) -> String {
        format!("{}{}", self.base_url, self.consultar_nit)
    }
}

/// Validation thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValidationRules {
    pub nit_min_length: usize,
    pub nit_max_length: usize,
    pub nombre_min_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            nit_min_length: NIT_MIN_LENGTH,
            nit_max_length: NIT_MAX_LENGTH,
            nombre_min_length: 3,
        }
    }
}

/// User-facing message strings (Spanish, as served to end users)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    // Titles
    pub titulo_campo_requerido: String,
    pub titulo_nit_invalido: String,
    pub titulo_encontrado: String,
    pub titulo_advertencia: String,
    pub titulo_sin_resultados: String,
    pub titulo_error_consulta: String,
    pub titulo_procesando: String,

    // Lookup input validation
    pub nit_requerido: String,
    pub nit_invalido: String,

    // Registration form validation
    pub nombre_requerido: String,
    pub nit_form_requerido: String,

    // Lookup lifecycle
    pub consultando: String,
    pub encontrado_desde: String,
    pub fuente_local: String,
    pub fuente_remota: String,
    pub no_encontrado: String,
    pub registrando: String,

    // Transport failures
    pub error_conexion: String,
    pub error_servidor: String,
    pub error_permisos: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            titulo_campo_requerido: "Campo requerido".to_string(),
            titulo_nit_invalido: "NIT inválido".to_string(),
            titulo_encontrado: "¡Proveedor encontrado!".to_string(),
            titulo_advertencia: "Advertencia".to_string(),
            titulo_sin_resultados: "Sin resultados".to_string(),
            titulo_error_consulta: "Error de consulta".to_string(),
            titulo_procesando: "Procesando...".to_string(),

            nit_requerido: "Por favor ingrese un NIT para buscar.".to_string(),
            nit_invalido: "El NIT debe contener solo números y tener entre 7 y 15 dígitos."
                .to_string(),

            nombre_requerido: "El nombre de la empresa es obligatorio.".to_string(),
            nit_form_requerido: "El NIT es obligatorio.".to_string(),

            consultando: "Consultando información del proveedor...".to_string(),
            encontrado_desde: "Información obtenida desde".to_string(),
            fuente_local: "base de datos local".to_string(),
            fuente_remota: "API del RUP".to_string(),
            no_encontrado: "Proveedor no encontrado".to_string(),
            registrando: "Registrando proveedor en el sistema...".to_string(),

            error_conexion: "Error de conexión. Verifique su conexión a internet.".to_string(),
            error_servidor: "Error interno del servidor. Contacte al administrador.".to_string(),
            error_permisos: "No tiene permisos para realizar esta acción.".to_string(),
        }
    }
}

/// Full module configuration, injected at construction time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProveedorConfig {
    pub endpoints: Endpoints,
    pub validation: ValidationRules,
    pub messages: Messages,
}
