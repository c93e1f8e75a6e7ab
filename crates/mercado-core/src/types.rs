//! Core value types for the marketplace back-office.
//!
//! This module defines the transient value types shared by the other crates:
//!
//! - [`CycleData`] - A sibling sales cycle used when naming a new cycle
//! - [`Market`] - A local market and its selling rules
//! - [`MarketStatus`] - Whether a market is currently operating
//! - [`PixKeyKind`] - The shape a PIX key was classified as
//! - [`PixValidation`] - Outcome of validating a PIX key

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MarketError;
use crate::periodicity::{Periodicity, SaleType};

/// A sales cycle as seen by the naming rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleData {
    /// Start of the offer window, ISO-like (`2025-10-13T08:00`). May be empty.
    pub inicio_ofertas: String,
    /// Cycle periodicity, if already chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periodicidade: Option<Periodicity>,
}

impl CycleData {
    /// Creates cycle data with only a start date.
    #[must_use]
    pub fn new(inicio_ofertas: impl Into<String>) -> Self {
        Self {
            inicio_ofertas: inicio_ofertas.into(),
            periodicidade: None,
        }
    }

    /// Sets the periodicity.
    #[must_use]
    pub const fn with_periodicity(mut self, periodicidade: Periodicity) -> Self {
        self.periodicidade = Some(periodicidade);
        self
    }
}

/// Operating status of a market.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketStatus {
    /// Market is operating.
    #[default]
    #[serde(rename = "ativo")]
    Active,
    /// Market is closed.
    #[serde(rename = "inativo")]
    Inactive,
}

impl MarketStatus {
    /// Returns the wire name (`ativo` or `inativo`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ativo",
            Self::Inactive => "inativo",
        }
    }
}

impl fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketStatus {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ativo" => Ok(Self::Active),
            "inativo" => Ok(Self::Inactive),
            other => Err(MarketError::UnknownStatus(other.to_string())),
        }
    }
}

/// A local market and the rules attached to it.
///
/// Serialises with the Portuguese field names
/// `{"id", "nome", "status", "tiposVenda", "administrador"?}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    /// Market identifier.
    pub id: String,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Operating status.
    #[serde(default)]
    pub status: MarketStatus,
    /// Sale types the market accepts, in display order.
    #[serde(rename = "tiposVenda", default)]
    pub sale_types: Vec<SaleType>,
    /// Name of the responsible administrator.
    #[serde(rename = "administrador", default, skip_serializing_if = "Option::is_none")]
    pub administrator: Option<String>,
}

impl Market {
    /// Creates an active market with no sale types and no administrator.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: MarketStatus::Active,
            sale_types: Vec::new(),
            administrator: None,
        }
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: MarketStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the accepted sale types.
    #[must_use]
    pub fn with_sale_types(mut self, sale_types: impl IntoIterator<Item = SaleType>) -> Self {
        self.sale_types = sale_types.into_iter().collect();
        self
    }

    /// Sets the administrator.
    #[must_use]
    pub fn with_administrator(mut self, administrator: impl Into<String>) -> Self {
        self.administrator = Some(administrator.into());
        self
    }

    /// Returns true if the market is operating.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == MarketStatus::Active
    }
}

/// Shape a PIX key was classified as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixKeyKind {
    /// E-mail address.
    Email,
    /// Mobile number with area code (11 digits).
    Celular,
    /// Individual taxpayer number.
    Cpf,
    /// Company taxpayer number.
    Cnpj,
    /// Random 32-character key.
    Evp,
}

impl PixKeyKind {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Celular => "celular",
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Evp => "evp",
        }
    }
}

impl fmt::Display for PixKeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message returned for a key that matches none of the accepted shapes.
pub const INVALID_PIX_KEY_MESSAGE: &str =
    "Informe uma chave PIX válida (e-mail, celular, CPF, CNPJ ou EVP).";

/// Outcome of validating a PIX key.
///
/// Serialises as `{"valido": bool, "tipo"?: string, "mensagem"?: string}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixValidation {
    /// Whether the key matched an accepted shape.
    #[serde(rename = "valido")]
    pub valid: bool,
    /// The matched shape, set when valid.
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PixKeyKind>,
    /// Message for the user, set when invalid.
    #[serde(rename = "mensagem", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PixValidation {
    /// A key classified as `kind`.
    #[must_use]
    pub const fn valid(kind: PixKeyKind) -> Self {
        Self {
            valid: true,
            kind: Some(kind),
            message: None,
        }
    }

    /// A key matching no accepted shape.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            valid: false,
            kind: None,
            message: Some(INVALID_PIX_KEY_MESSAGE.to_string()),
        }
    }
}
