//! Payload sent to the insight collaborator.

use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::{Scenario, TokenStats};

/// Statistics snapshot plus the scenario the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InsightRequest {
    stats: TokenStats,
    scenario: Scenario,
}

impl InsightRequest {
    /// Captures a snapshot for analysis.
    #[must_use]
    pub const fn new(stats: TokenStats, scenario: Scenario) -> Self {
        Self { stats, scenario }
    }

    /// Returns the statistics snapshot.
    #[must_use]
    pub const fn stats(&self) -> &TokenStats {
        &self.stats
    }

    /// Returns the selected scenario.
    #[must_use]
    pub const fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Renders the analyst prompt.
    #[must_use]
    pub fn prompt(&self) -> String {
        let s = &self.stats;
        format!(
            "Atue como um Arquiteto de Dashboards e Gestor de Tokenomics.\n\
             Analise os seguintes dados do token:\n\
             - Preço: ${price:.4}\n\
             - Market Cap: ${mc:.2}\n\
             - Liquidez: ${liq:.2}\n\
             - Circulação: {circ:.0} tokens\n\
             - Relação Liquidez/Market Cap: {ratio:.2}%\n\
             - % do Time: {team}%\n\
             - Usuários: {users}\n\
             - Nível de Risco: {risk}\n\
             - Cenário Selecionado: {scenario}\n\
             \n\
             Forneça uma análise em Português estruturada em JSON:\n\
             1. situacao: Resumo curto da saúde atual.\n\
             2. pontosFortes: Lista de 2 pontos.\n\
             3. pontosFracos: Lista de 2 pontos (identifique riscos reais).\n\
             4. recomendacoes: O que o gestor deve fazer agora?\n\
             5. alertaRealismo: Se os números parecem irreais (ex: preço alto com pouca liquidez), explique porquê.\n\
             \n\
             Linguagem simples para iniciantes.",
            price = s.price,
            mc = s.market_cap,
            liq = s.liquidity,
            circ = s.circulating_supply,
            ratio = s.liquidity_to_mc_ratio,
            team = s.team_percentage,
            users = s.user_count,
            risk = s.risk_level,
            scenario = self.scenario,
        )
    }

    /// JSON schema the provider should constrain its answer to.
    #[must_use]
    pub fn response_schema() -> Value {
        let list = json!({ "type": "array", "items": { "type": "string" } });
        json!({
            "type": "object",
            "properties": {
                "situacao": { "type": "string" },
                "pontosFortes": list,
                "pontosFracos": list,
                "recomendacoes": list,
                "alertaRealismo": { "type": "string" },
            },
            "required": ["situacao", "pontosFortes", "pontosFracos", "recomendacoes", "alertaRealismo"],
        })
    }
}
