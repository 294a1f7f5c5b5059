//! Per-view drawing for [`SocialApp`].

use painel_core::canvas::{Canvas, FontSize};
use painel_core::geometry::{Point, Rect, Rgb};
use painel_core::theme::Theme;
use painel_core::widgets::Widget;
use painel_db::models::inscricao::{DetailedStatistics, Inscricao, InscricaoStatus, StatusCounts};

use crate::app::{Dialog, SocialApp, MSG_EMPTY_LIST};
use crate::currency::format_currency;
use crate::form::FormField;
use crate::views::{dialog_rect, field_rect, row_rect, stat_card_rects, View};

const NAV_SUBTITLES: [&str; 3] = [
    "Cadastrar nova pessoa",
    "Ver e gerenciar inscrições",
    "Gerar relatórios em PDF",
];
const CHART_HEIGHT: f32 = 200.0;
const SCRIM: Rgb = Rgb::new(90, 90, 90);

pub fn status_color(theme: &Theme, status: Option<InscricaoStatus>) -> Rgb {
    match status {
        Some(InscricaoStatus::Pendente) => theme.warning,
        Some(InscricaoStatus::Aprovada) => theme.success,
        Some(InscricaoStatus::Rejeitada) => theme.danger,
        None => theme.text_secondary,
    }
}

fn stat_card(canvas: &mut Canvas, theme: &Theme, rect: Rect, title: &str, value: i64, color: Rgb) {
    canvas.fill_rect(rect, theme.surface, 10.0);
    canvas.stroke_rect(rect, color, 2.0, 10.0);
    canvas.text_centered(
        title,
        Point::new(rect.center().x, rect.y + 25.0),
        FontSize::Small,
        theme.text_secondary,
    );
    canvas.text_centered(
        value.to_string(),
        Point::new(rect.center().x, rect.y + 60.0),
        FontSize::Header,
        color,
    );
}

fn stat_cards(canvas: &mut Canvas, theme: &Theme, rects: [Rect; 4], counts: &StatusCounts) {
    let cards = [
        ("Total de Inscrições", counts.total, theme.primary),
        ("Pendentes", counts.pendentes, theme.warning),
        ("Aprovadas", counts.aprovadas, theme.success),
        ("Rejeitadas", counts.rejeitadas, theme.danger),
    ];
    for (rect, (title, value, color)) in rects.into_iter().zip(cards) {
        stat_card(canvas, theme, rect, title, value, color);
    }
}

fn page_title(canvas: &mut Canvas, theme: &Theme, title: &str) {
    canvas.text(title, Point::new(180.0, 50.0), FontSize::Header, theme.primary);
}

impl SocialApp {
    pub fn draw(&self, canvas: &mut Canvas) {
        let theme = self.theme;
        let (w, h) = (self.size.width as f32, self.size.height as f32);
        canvas.fill_rect(Rect::new(0.0, 0.0, w, h), theme.background, 0.0);

        match self.view {
            View::Login => self.draw_login(canvas),
            View::Register => {
                canvas.text_centered(
                    "Criar Nova Conta",
                    Point::new(w / 2.0, 140.0),
                    FontSize::Title,
                    theme.primary,
                );
            }
            View::Dashboard => self.draw_dashboard(canvas),
            View::Form => self.draw_form(canvas),
            View::List => self.draw_list(canvas),
            View::Reports => self.draw_reports(canvas),
        }
        self.widgets.draw(self.view, canvas);

        if let Some(dialog) = &self.dialog {
            self.draw_dialog(canvas, dialog);
        }
        self.status.draw(canvas, &theme, w, h - 25.0);
    }

    fn draw_login(&self, canvas: &mut Canvas) {
        let cx = self.size.width as f32 / 2.0;
        canvas.text_centered("Programa Social", Point::new(cx, 150.0), FontSize::Title, self.theme.primary);
        canvas.text_centered(
            "Sistema de Cadastro",
            Point::new(cx, 195.0),
            FontSize::Body,
            self.theme.text_secondary,
        );
    }

    fn draw_dashboard(&self, canvas: &mut Canvas) {
        let theme = &self.theme;
        let w = self.size.width as f32;
        let cx = w / 2.0;

        canvas.fill_rect(Rect::new(40.0, 30.0, w - 80.0, 70.0), theme.secondary, 10.0);
        if let Some(session) = &self.session {
            canvas.text(
                format!("Bem-vindo, {}", session.nome),
                Point::new(70.0, 65.0),
                FontSize::Body,
                theme.text_primary,
            );
        }
        canvas.text_centered("Painel de Controle", Point::new(cx, 140.0), FontSize::Title, theme.primary);
        stat_cards(canvas, theme, stat_card_rects(self.size, 180.0), &self.counts);

        for (i, subtitle) in NAV_SUBTITLES.iter().enumerate() {
            let x = cx - 390.0 + i as f32 * 270.0 + 120.0;
            canvas.text_centered(*subtitle, Point::new(x, 460.0), FontSize::Small, theme.text_secondary);
        }
    }

    fn draw_form(&self, canvas: &mut Canvas) {
        let theme = &self.theme;
        page_title(canvas, theme, "Nova Inscrição");
        canvas.text("Dados Pessoais", Point::new(40.0, 100.0), FontSize::Body, theme.primary);
        canvas.text("Dados Socioeconômicos", Point::new(40.0, 395.0), FontSize::Body, theme.primary);
        for field in FormField::ALL {
            let rect = field_rect(field);
            canvas.text(
                field.label(),
                Point::new(rect.x, rect.y - 10.0),
                FontSize::Small,
                theme.text_secondary,
            );
        }
    }

    fn draw_list(&self, canvas: &mut Canvas) {
        let theme = &self.theme;
        let (w, h) = (self.size.width as f32, self.size.height as f32);
        page_title(canvas, theme, "Gerenciar Inscrições");

        let rows = self.visible_rows();
        if rows.is_empty() {
            canvas.text_centered(MSG_EMPTY_LIST, Point::new(w / 2.0, 300.0), FontSize::Body, theme.text_secondary);
        }
        for (slot, inscricao) in rows.iter().enumerate() {
            self.draw_row(canvas, row_rect(self.size, slot), inscricao);
        }
        canvas.text_centered(
            format!("Página {} de {}", self.page + 1, self.page_count()),
            Point::new(w / 2.0, h - 40.0),
            FontSize::Small,
            theme.text_secondary,
        );
    }

    fn draw_row(&self, canvas: &mut Canvas, card: Rect, inscricao: &Inscricao) {
        let theme = &self.theme;
        let (x, y) = (card.x + 20.0, card.y);
        canvas.fill_rect(card, theme.surface, 10.0);
        canvas.stroke_rect(card, theme.border, 1.0, 10.0);

        canvas.text(&inscricao.nome_completo, Point::new(x, y + 20.0), FontSize::Body, theme.text_primary);
        canvas.text(
            format!("Idade: {} anos | {}", inscricao.idade, inscricao.genero),
            Point::new(x, y + 45.0),
            FontSize::Small,
            theme.text_secondary,
        );
        canvas.text(
            format!("Renda Familiar: {}", format_currency(inscricao.renda_familiar)),
            Point::new(x, y + 65.0),
            FontSize::Small,
            theme.text_secondary,
        );
        canvas.text(
            format!("Membros da Família: {}", inscricao.membros_familia),
            Point::new(x + 300.0, y + 65.0),
            FontSize::Small,
            theme.text_secondary,
        );

        let badge = Rect::new(card.right() - 140.0, y + 10.0, 120.0, 30.0);
        canvas.fill_rect(badge, status_color(theme, inscricao.status()), 15.0);
        canvas.text_centered(&inscricao.status, badge.center(), FontSize::Small, theme.on_accent);
        canvas.text(
            format!("Cadastrado em: {}", inscricao.created_at.format("%Y-%m-%d")),
            Point::new(card.right() - 260.0, y + 100.0),
            FontSize::Small,
            theme.text_secondary,
        );
    }

    fn draw_reports(&self, canvas: &mut Canvas) {
        let theme = &self.theme;
        let cx = self.size.width as f32 / 2.0;
        page_title(canvas, theme, "Relatórios");
        canvas.text_centered("Estatísticas Gerais", Point::new(cx, 110.0), FontSize::Body, theme.text_primary);
        stat_cards(canvas, theme, stat_card_rects(self.size, 135.0), &self.detailed.counts);
        canvas.text_centered("Relatórios Disponíveis", Point::new(cx, 280.0), FontSize::Body, theme.text_primary);
    }

    fn draw_dialog(&self, canvas: &mut Canvas, dialog: &Dialog) {
        let theme = &self.theme;
        let (w, h) = (self.size.width as f32, self.size.height as f32);
        let rect = dialog_rect(self.size);

        canvas.fill_rect(Rect::new(0.0, 0.0, w, h), SCRIM, 0.0);
        canvas.fill_rect(rect, theme.surface, 12.0);
        canvas.stroke_rect(rect, theme.border, 1.0, 12.0);

        match dialog {
            Dialog::Details(inscricao) => draw_details(canvas, theme, rect, inscricao),
            Dialog::StatusReport(counts) => draw_status_report(canvas, theme, rect, counts),
            Dialog::DetailedStats(stats) => draw_detailed_stats(canvas, theme, rect, stats),
        }
        self.close_button.draw(canvas);
    }
}

fn dialog_heading(canvas: &mut Canvas, theme: &Theme, rect: Rect, title: &str) {
    canvas.text(title, Point::new(rect.x + 30.0, rect.y + 40.0), FontSize::Body, theme.primary);
}

fn draw_details(canvas: &mut Canvas, theme: &Theme, rect: Rect, inscricao: &Inscricao) {
    dialog_heading(canvas, theme, rect, &format!("Detalhes - {}", inscricao.nome_completo));
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "Não informado".to_string());
    let lines = [
        format!("ID: {}", inscricao.id),
        format!("Idade: {} anos", inscricao.idade),
        format!("Gênero: {}", inscricao.genero),
        format!("CPF: {}", optional(&inscricao.cpf)),
        format!("Endereço: {}", inscricao.endereco),
        format!("Telefone: {}", optional(&inscricao.telefone)),
        format!("Email: {}", optional(&inscricao.email)),
        format!("Renda Familiar: {}", format_currency(inscricao.renda_familiar)),
        format!("Membros da Família: {}", inscricao.membros_familia),
        format!("Despesas Mensais: {}", format_currency(inscricao.despesas_mensais)),
        format!("Escolaridade: {}", inscricao.escolaridade),
        format!("Situação de Moradia: {}", inscricao.situacao_moradia),
        format!("Status: {}", inscricao.status),
        format!("Cadastrado em: {}", inscricao.created_at.format("%Y-%m-%d %H:%M:%S")),
        format!(
            "Observações: {}",
            inscricao.observacoes.as_deref().unwrap_or("Nenhuma observação")
        ),
    ];
    for (i, line) in lines.into_iter().enumerate() {
        canvas.text(
            line,
            Point::new(rect.x + 30.0, rect.y + 80.0 + i as f32 * 26.0),
            FontSize::Small,
            theme.text_primary,
        );
    }
}

fn draw_status_report(canvas: &mut Canvas, theme: &Theme, rect: Rect, counts: &StatusCounts) {
    dialog_heading(canvas, theme, rect, "Relatório por Status");
    canvas.text(
        format!("Total de Inscrições: {}", counts.total),
        Point::new(rect.x + 30.0, rect.y + 85.0),
        FontSize::Body,
        theme.text_primary,
    );

    let bar_width = rect.width - 60.0;
    for (i, status) in InscricaoStatus::ALL.into_iter().enumerate() {
        let y = rect.y + 130.0 + i as f32 * 80.0;
        let percentage = counts.percentage(status);
        canvas.text(
            format!("{status}: {} ({percentage:.1}%)", counts.count(status)),
            Point::new(rect.x + 30.0, y),
            FontSize::Small,
            theme.text_primary,
        );
        let track = Rect::new(rect.x + 30.0, y + 20.0, bar_width, 20.0);
        canvas.fill_rect(track, theme.card, 10.0);
        let filled = Rect::new(track.x, track.y, bar_width * percentage as f32 / 100.0, track.height);
        canvas.fill_rect(filled, status_color(theme, Some(status)), 10.0);
    }
}

fn draw_detailed_stats(canvas: &mut Canvas, theme: &Theme, rect: Rect, stats: &DetailedStatistics) {
    dialog_heading(canvas, theme, rect, "Estatísticas Detalhadas");
    let lines = [
        format!("Total de Inscrições: {}", stats.counts.total),
        format!("Renda Familiar Média: {}", format_currency(stats.media_renda)),
        format!("Média de Membros por Família: {:.1}", stats.media_membros),
    ];
    for (i, line) in lines.into_iter().enumerate() {
        canvas.text(
            line,
            Point::new(rect.x + 30.0, rect.y + 85.0 + i as f32 * 30.0),
            FontSize::Small,
            theme.text_primary,
        );
    }

    let baseline = rect.y + 220.0 + CHART_HEIGHT;
    let max = stats.counts.max_count() as f32 * 1.2;
    for (i, status) in InscricaoStatus::ALL.into_iter().enumerate() {
        let count = stats.counts.count(status);
        let x = rect.x + 90.0 + i as f32 * 160.0;
        let height = CHART_HEIGHT * count as f32 / max;
        canvas.fill_rect(
            Rect::new(x, baseline - height, 100.0, height),
            status_color(theme, Some(status)),
            4.0,
        );
        canvas.text_centered(
            count.to_string(),
            Point::new(x + 50.0, baseline - height - 15.0),
            FontSize::Small,
            theme.text_primary,
        );
        canvas.text_centered(
            status.as_str(),
            Point::new(x + 50.0, baseline + 20.0),
            FontSize::Small,
            theme.text_secondary,
        );
    }
    canvas.line(
        Point::new(rect.x + 60.0, baseline),
        Point::new(rect.right() - 60.0, baseline),
        theme.border,
        1.0,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_is_drawn_in_secondary_text() {
        let theme = Theme::LIGHT;
        assert_eq!(status_color(&theme, None), theme.text_secondary);
        assert_eq!(status_color(&theme, Some(InscricaoStatus::Aprovada)), theme.success);
    }
}
