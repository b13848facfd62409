//! Per-name annotations appended to tree lines
//!
//! Lookups are exact matches on the base name and apply wherever that name
//! occurs in the tree. The built-in table describes one particular
//! client/server game project; other projects can supply their own table as a
//! JSON object of `"name": "comment"` pairs.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

/// Built-in comments keyed by base name.
const BUILTIN: &[(&str, &str)] = &[
    ("README.md", "Documentação do front-end"),
    (
        "eslint.config.js",
        "Configuração do lint para os dois ambientes client e server",
    ),
    ("package.json", "Dependências e scripts principais (monorepo)"),
    (".gitignore", "Não subir pro git"),
    ("node_modules", "Node Modules"),
    ("index.html", "HTML principal"),
    ("vite.config.js", "Configuração do Vite"),
    (".env.local", "Variáveis de ambiente local (React)"),
    (".env.production", "Variáveis de ambiente produção (React)"),
    ("favicon.ico", "Ícone do site"),
    ("App.jsx", "Componente raiz"),
    ("main.jsx", "Entry point (Vite)"),
    ("authState.js", "Estado de autenticação"),
    ("ChatPanel.jsx", "Componente de chat"),
    ("chatState.js", "Estado do chat"),
    ("countryService.js", "Identificação dos países"),
    ("CountryDetails.jsx", "Componente de detalhes"),
    ("gameState.js", "Estado do jogo"),
    ("MapView.jsx", "Mapa principal"),
    ("SeaRoutes.jsx", "Rotas marítimas"),
    ("mapboxUtils.js", "Integração com Mapbox"),
    ("EconomyPanel.jsx", "Componente Painel de Economia"),
    ("economyState.js", "Estado de economia"),
    ("MilitaryPanel.jsx", "Componente Painel Militar"),
    ("militaryState.js", "Estado militar"),
    ("PoliticsPanel.jsx", "Componente Painel de Política"),
    ("politicsState.js", "Estado político"),
    ("TradePanel.jsx", "Componente Painel de Comercio"),
    ("tradeState.js", "Estado do comércio"),
    ("socketService.js", "Comunicação via Socket.io"),
    ("roomState.js", "Estado das salas"),
    ("AuthPage.jsx", "Tela de autenticação/login"),
    ("GamePage.jsx", "Tela principal do jogo"),
    ("RoomPage.jsx", "Tela de seleção de sala"),
    ("index.js", "Criação e combinação dos reducers"),
    ("socketMiddleware.js", "Middleware para Socket.io"),
    ("Sideview.jsx", "Layout da sidebar direita Sideview"),
    ("Sidetools.jsx", "Layout da sidebar esquerda Sidetools"),
    ("redisClient.js", "Infraestrutura do Redis"),
    ("gameStateUtils.js", "Utilitários de estado para o jogo"),
    ("server.js", "Entry point do servidor"),
    ("authHandlers.js", "Handlers de autenticação"),
    ("chatHandlers.js", "Handlers do chat"),
    ("countryAssignment.js", "Atribuições de países"),
    ("countryUtils.js", "Utilitários para países"),
    ("playerHandlers.js", "Handlers para jogadores"),
    ("playerRoomHandlers.js", "Handlers para jogadores na sala"),
    ("playerStateManager.js", "Gerencia estado dos jogadores"),
    ("playerUtils.js", "Funções utilitárias"),
    ("roomHandlers.js", "Handlers para sala"),
    ("roomManagement.js", "Gerenciamento de sala"),
    ("roomNotifications.js", "Notificações da Sala"),
    ("roomUtils.js", "Utilitários da sala"),
];

/// Immutable mapping from base name to comment text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AnnotationTable {
    comments: HashMap<String, String>,
}

impl AnnotationTable {
    /// An empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled-in table.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN.iter().copied())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            comments: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a JSON object of `"name": "comment"` pairs.
    pub fn from_json(json: &str) -> io::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table from a JSON file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
    }

    /// Overlay `other` on this table; its entries win on conflicts.
    pub fn merge(mut self, other: AnnotationTable) -> Self {
        self.comments.extend(other.comments);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.comments.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// The text appended to a display line for `name`: `"  # <comment>"`, or
    /// nothing when the name is not annotated or its comment is empty.
    pub fn comment_suffix(&self, name: &str) -> String {
        match self.get(name) {
            Some(comment) if !comment.is_empty() => format!("  # {}", comment),
            _ => String::new(),
        }
    }
}
